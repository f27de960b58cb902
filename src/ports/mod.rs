//! Port definitions decoupling the application from its adapters.

mod completion;

pub use completion::{
    CannedCompletionClient, CompletionClient, CompletionRequest, FailingCompletionClient,
};
