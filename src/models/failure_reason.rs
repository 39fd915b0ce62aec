use serde::{Deserialize, Serialize};

/// Catalog of reasons a payment attempt can fail with.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    CardDeclined,
    InsufficientFunds,
    ExpiredCard,
    IncorrectCvc,
    ProcessingError
}

impl FailureReason {
    pub const ALL: [FailureReason; 5] = [
        FailureReason::CardDeclined,
        FailureReason::InsufficientFunds,
        FailureReason::ExpiredCard,
        FailureReason::IncorrectCvc,
        FailureReason::ProcessingError
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FailureReason::CardDeclined => "Card declined",
            FailureReason::InsufficientFunds => "Insufficient funds",
            FailureReason::ExpiredCard => "Expired card",
            FailureReason::IncorrectCvc => "Incorrect CVC",
            FailureReason::ProcessingError => "Processing error"
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FailureReason::CardDeclined => "#ef4444",
            FailureReason::InsufficientFunds => "#f97316",
            FailureReason::ExpiredCard => "#eab308",
            FailureReason::IncorrectCvc => "#8b5cf6",
            FailureReason::ProcessingError => "#64748b"
        }
    }
}
