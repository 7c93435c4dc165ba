/// Result of a create call that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// 201.
    Created,
    /// 400. The API answers 400 for a duplicate email, so any 400 lands here.
    AlreadyExists,
    Failed { status: u16, body: String },
}

impl CreateOutcome {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            201 => Self::Created,
            400 => Self::AlreadyExists,
            _ => Self::Failed { status, body },
        }
    }
}

/// Result of an update call that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// 200.
    Updated,
    Failed { status: u16, body: String },
}

impl UpdateOutcome {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            200 => Self::Updated,
            _ => Self::Failed { status, body },
        }
    }
}
