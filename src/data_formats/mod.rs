mod request;
mod response;

pub use request::*;
pub use response::*;

use serde::{Deserialize, Serialize};

pub const ARTICLES_PER_PAGE: i64 = 5;

#[derive(Deserialize, Serialize, Debug)]
pub struct PageQueryParams {
    #[serde(default = "get_default_page")]
    pub page: i64,
}

fn get_default_page() -> i64 {
    1
}
