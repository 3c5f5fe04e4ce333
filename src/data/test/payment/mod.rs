use crate::{
    data::payment::PaymentRepository,
    model::payment::{PaymentMethod, PaymentState},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_pending;
mod transition;
