mod get_by_slug;
mod get_monitored;

use bastion_test_utils::prelude::*;

use crate::server::data::alliance::AllianceRepository;
