mod outcome;
mod teammate;

pub use outcome::{CreateOutcome, UpdateOutcome};
pub use teammate::{
    AccountRequest, CreateTeammateBody, RemoteAccount, TeammateList, UpdateTeammateBody,
};
