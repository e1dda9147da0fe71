//! Client Configuration
//!
//! Fixed settings of the viewer. There is no runtime configuration:
//! the page is served statically next to its data directory.

use chrono::FixedOffset;

/// Snapshot location, relative to the page
pub const SNAPSHOT_PATH: &str = "./data/latest.json";

/// Asia/Seoul has been UTC+09:00 without DST since 1988
const REFERENCE_OFFSET_SECS: i32 = 9 * 3600;

/// Shown in place of results when the snapshot could not be loaded
pub const LOAD_FAILED_MESSAGE: &str =
    "데이터를 불러오지 못했습니다. 저장소에 latest.json이 있는지 확인하세요.";

/// Shown when the current filters match nothing
pub const NO_RESULTS_MESSAGE: &str = "조건에 맞는 결과가 없습니다.";

/// Shown while the snapshot request is in flight
pub const LOADING_MESSAGE: &str = "불러오는 중...";

/// Reference timezone for "today" and for displayed timestamps
pub fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_OFFSET_SECS).expect("valid reference offset")
}
