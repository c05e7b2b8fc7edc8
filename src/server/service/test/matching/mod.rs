use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::matching::MatchingService};

mod find_matches;
