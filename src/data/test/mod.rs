mod payment;
mod reservation;
