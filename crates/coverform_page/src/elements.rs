//! Identifiers the host markup must provide, and the concrete presentation
//! values behind the core's semantic tokens.

pub const LOCAL_SOURCE: &str = "local_source";
pub const URL_SOURCE: &str = "url_source";
pub const NO_COVER: &str = "no_cover";

pub const IF_LOCAL: &str = "ifLocal";
pub const IF_URL: &str = "ifURL";

pub const FRM_CONTACT: &str = "frmContact";
pub const COLLECTION: &str = "collection";

pub const F_NAME: &str = "fName";
pub const ERROR_MESSAGE: &str = "errorMessage";

pub const ERROR_CLASS: &str = "error";
pub const ALERT_COLOR: &str = "indianred";
