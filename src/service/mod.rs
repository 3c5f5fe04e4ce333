pub mod availability;
pub mod booking;
pub mod collaborator;
pub mod payment;
pub mod pricing;
pub mod refund;

#[cfg(test)]
mod test;
