pub mod use_balance;
pub mod use_credential;
pub mod use_period_usage;
pub mod use_records;
pub mod use_session;
pub mod use_settings;
pub mod use_statistics;

use crate::models::error::AppError;
use std::rc::Rc;

/// Lifecycle of an asynchronously fetched resource.
#[derive(Clone, PartialEq, Debug)]
pub enum DataState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(AppError),
}

impl<T> DataState<T> {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error if the fetch failed
    pub fn error(&self) -> Option<&AppError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}
