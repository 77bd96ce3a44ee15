use ordertx_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias for domain rule functions
pub type Result<T> = std::result::Result<T, OrderError>;

/// Result type alias for anything that crosses a port or touches storage
pub type ExResult<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    /// Submission shape rejected before any storage access
    Validation,

    // Registration
    /// Menu lookup returned a result that cannot be correlated with the request
    LookupMismatch,
    /// Total price does not fit in the integer price type
    ArithmeticOverflow,

    // Storage
    ConstraintViolation,
    Persistence,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::LookupMismatch => "ERR_LOOKUP_MISMATCH",
            ExErrorKind::ArithmeticOverflow => "ERR_ARITHMETIC_OVERFLOW",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus optional
/// context for debugging. Built with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (order code, menu code, migration id)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain rule failures of order registration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Submission has no ordered items
    #[error("Order submission contains no menu items")]
    EmptySubmission,

    /// More items than one order may carry
    #[error("Order submission has {count} items, at most {max} allowed")]
    TooManyItems { count: usize, max: usize },

    /// An ordered quantity is below one
    #[error("Invalid quantity {quantity} for menu {menu_code}")]
    InvalidQuantity { menu_code: i64, quantity: u32 },

    /// Menu lookup returned a different number of rows than codes requested
    #[error("Menu lookup returned {returned} items for {requested} requested codes")]
    LookupMismatch { requested: usize, returned: usize },

    /// A submitted menu code has no counterpart in the lookup result
    #[error("Menu {menu_code} missing from lookup result")]
    MenuNotFound { menu_code: i64 },

    /// Quantity times price (or the running sum) overflowed
    #[error("Total price overflow at menu {menu_code}")]
    TotalOverflow { menu_code: i64 },
}

impl From<OrderError> for ExError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::EmptySubmission => ExError::new(ExErrorKind::Validation)
                .with_op("validate_submission")
                .with_message(message),

            OrderError::TooManyItems { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("validate_submission")
                .with_message(message),

            OrderError::InvalidQuantity { menu_code, .. } => {
                ExError::new(ExErrorKind::Validation)
                    .with_op("validate_submission")
                    .with_entity_id(menu_code.to_string())
                    .with_message(message)
            }

            OrderError::LookupMismatch { .. } => ExError::new(ExErrorKind::LookupMismatch)
                .with_op("compute_total_price")
                .with_message(message),

            OrderError::MenuNotFound { menu_code } => ExError::new(ExErrorKind::LookupMismatch)
                .with_op("compute_total_price")
                .with_entity_id(menu_code.to_string())
                .with_message(message),

            OrderError::TotalOverflow { menu_code } => {
                ExError::new(ExErrorKind::ArithmeticOverflow)
                    .with_op("compute_total_price")
                    .with_entity_id(menu_code.to_string())
                    .with_message(message)
            }
        }
    }
}
