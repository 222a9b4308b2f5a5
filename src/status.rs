//! Real time status decoding
//!
//! A status query transmits `DLE EOT n` and reads back a fixed length reply: six bytes for [FullStatus](StatusRequest::FullStatus), one byte for every other request. The printer answers immediately, even while it is busy printing.

use crate::command::Command;
use serde::{Serialize, Deserialize};

/// Kinds of real time status requests
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Hash)]
pub enum StatusRequest {
    /// Printer status, reports only the online flag
    Status,
    /// Off line cause
    OffLineStatus,
    /// Error cause
    ErrorStatus,
    /// Paper roll sensor
    PaperRollStatus,
    /// Print status
    PrintStatus,
    /// Six byte report, covering every sensor
    FullStatus
}

impl Eq for StatusRequest{}

impl StatusRequest {
    /// `n` argument of the `DLE EOT n` command
    pub fn request_code(&self) -> u8 {
        match self {
            StatusRequest::Status => 0x01,
            StatusRequest::OffLineStatus => 0x02,
            StatusRequest::ErrorStatus => 0x03,
            StatusRequest::PaperRollStatus => 0x04,
            StatusRequest::PrintStatus => 0x11,
            StatusRequest::FullStatus => 0x14
        }
    }

    /// Number of bytes the printer answers with
    pub fn response_length(&self) -> usize {
        match self {
            StatusRequest::FullStatus => 6,
            _ => 1
        }
    }

    /// The three byte query
    pub fn command(&self) -> Vec<u8> {
        Command::RealTimeStatus{request_code: self.request_code()}.as_bytes()
    }
}

/// Decoded printer status
///
/// Only the fields covered by the request are populated, the rest stay `None` (absent, which is not the same as `false`) and are left out when serialized.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct StatusReport {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_online: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_paper_present: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_paper_level_okay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_ticket_present_at_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_cover_closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_paper_motor_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_diag_button_released: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_head_temp_okay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_comms_okay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_power_supply_voltage_okay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_paper_path_clear: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_cutter_okay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_normal_feed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub has_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub has_fatal_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub has_recoverable_error: Option<bool>,
    /// Set when the reply had the wrong length, every other field is then absent
    pub is_invalid_report: bool
}

impl StatusReport {
    /// Report for a missing or malformed reply
    pub fn invalid() -> StatusReport {
        StatusReport {
            is_invalid_report: true,
            ..StatusReport::default()
        }
    }

    /// Decodes a raw reply for the given request
    ///
    /// ```rust
    /// use thermal_rs::{StatusReport, StatusRequest};
    ///
    /// let report = StatusReport::decode(StatusRequest::Status, &[0x08]);
    /// assert_eq!(Some(false), report.is_online);
    /// assert_eq!(None, report.is_paper_present);
    ///
    /// assert!(StatusReport::decode(StatusRequest::FullStatus, &[0x00]).is_invalid_report);
    /// ```
    pub fn decode(request: StatusRequest, data: &[u8]) -> StatusReport {
        if data.len() != request.response_length() {
            log::warn!("Expected {} status bytes for {:?}, got {}", request.response_length(), request, data.len());
            return StatusReport::invalid();
        }

        let clear = |byte: u8, mask: u8| byte & mask == 0;
        let set = |byte: u8, mask: u8| byte & mask == mask;

        let mut report = StatusReport::default();
        match request {
            StatusRequest::Status => {
                report.is_online = Some(clear(data[0], 0x08));
            },
            StatusRequest::OffLineStatus => {
                report.is_cover_closed = Some(clear(data[0], 0x04));
                report.is_normal_feed = Some(clear(data[0], 0x08));
                report.is_paper_present = Some(clear(data[0], 0x20));
                report.has_error = Some(set(data[0], 0x40));
            },
            StatusRequest::ErrorStatus => {
                // Older firmware notes put the fatal flag under 0x08 as well, bit 5 is the one documented
                report.is_cutter_okay = Some(clear(data[0], 0x08));
                report.has_fatal_error = Some(set(data[0], 0x20));
                report.has_recoverable_error = Some(set(data[0], 0x40));
            },
            StatusRequest::PaperRollStatus => {
                report.is_paper_level_okay = Some(clear(data[0], 0x0c));
                report.is_paper_present = Some(clear(data[0], 0x60));
            },
            StatusRequest::PrintStatus => {
                report.is_paper_motor_off = Some(clear(data[0], 0x04));
                report.is_paper_present = Some(clear(data[0], 0x04));
            },
            StatusRequest::FullStatus => {
                report.is_paper_present = Some(clear(data[2], 0x01));
                report.is_paper_level_okay = Some(clear(data[2], 0x04));
                report.is_ticket_present_at_output = Some(set(data[2], 0x20));

                report.is_cover_closed = Some(clear(data[3], 0x03));
                report.is_paper_motor_off = Some(clear(data[3], 0x08));
                report.is_diag_button_released = Some(clear(data[3], 0x20));

                report.is_head_temp_okay = Some(clear(data[4], 0x01));
                report.is_comms_okay = Some(clear(data[4], 0x02));
                report.is_power_supply_voltage_okay = Some(clear(data[4], 0x08));
                report.is_paper_path_clear = Some(clear(data[4], 0x40));

                report.is_cutter_okay = Some(clear(data[5], 0x01));
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_online() {
        let report = StatusReport::decode(StatusRequest::Status, &[0x00]);
        assert_eq!(StatusReport {
            is_online: Some(true),
            ..StatusReport::default()
        }, report);
        assert_eq!(Some(false), StatusReport::decode(StatusRequest::Status, &[0x08]).is_online);
    }

    #[test]
    fn offline_status_bits() {
        let report = StatusReport::decode(StatusRequest::OffLineStatus, &[0x64]);
        assert_eq!(Some(false), report.is_cover_closed);
        assert_eq!(Some(true), report.is_normal_feed);
        assert_eq!(Some(false), report.is_paper_present);
        assert_eq!(Some(true), report.has_error);
        assert_eq!(None, report.is_online);
    }

    #[test]
    fn error_status_uses_distinct_bits() {
        let report = StatusReport::decode(StatusRequest::ErrorStatus, &[0x08]);
        assert_eq!(Some(false), report.is_cutter_okay);
        assert_eq!(Some(false), report.has_fatal_error);
        assert_eq!(Some(false), report.has_recoverable_error);

        let report = StatusReport::decode(StatusRequest::ErrorStatus, &[0x60]);
        assert_eq!(Some(true), report.is_cutter_okay);
        assert_eq!(Some(true), report.has_fatal_error);
        assert_eq!(Some(true), report.has_recoverable_error);
    }

    #[test]
    fn paper_roll_needs_both_bits_clear() {
        let report = StatusReport::decode(StatusRequest::PaperRollStatus, &[0x04]);
        assert_eq!(Some(false), report.is_paper_level_okay);
        assert_eq!(Some(true), report.is_paper_present);

        let report = StatusReport::decode(StatusRequest::PaperRollStatus, &[0x40]);
        assert_eq!(Some(true), report.is_paper_level_okay);
        assert_eq!(Some(false), report.is_paper_present);
    }

    #[test]
    fn print_status_shares_bit_two() {
        let report = StatusReport::decode(StatusRequest::PrintStatus, &[0x04]);
        assert_eq!(Some(false), report.is_paper_motor_off);
        assert_eq!(Some(false), report.is_paper_present);
    }

    #[test]
    fn full_status_all_clear() {
        let report = StatusReport::decode(StatusRequest::FullStatus, &[0x10, 0x0f, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(StatusReport {
            is_paper_present: Some(true),
            is_paper_level_okay: Some(true),
            is_ticket_present_at_output: Some(false),
            is_cover_closed: Some(true),
            is_paper_motor_off: Some(true),
            is_diag_button_released: Some(true),
            is_head_temp_okay: Some(true),
            is_comms_okay: Some(true),
            is_power_supply_voltage_okay: Some(true),
            is_paper_path_clear: Some(true),
            is_cutter_okay: Some(true),
            ..StatusReport::default()
        }, report);
    }

    #[test]
    fn full_status_cover_needs_both_bits() {
        let report = StatusReport::decode(StatusRequest::FullStatus, &[0, 0, 0x20, 0x02, 0x4b, 0x01]);
        assert_eq!(Some(true), report.is_ticket_present_at_output);
        assert_eq!(Some(false), report.is_cover_closed);
        assert_eq!(Some(false), report.is_head_temp_okay);
        assert_eq!(Some(false), report.is_comms_okay);
        assert_eq!(Some(false), report.is_power_supply_voltage_okay);
        assert_eq!(Some(false), report.is_paper_path_clear);
        assert_eq!(Some(false), report.is_cutter_okay);
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert_eq!(StatusReport::invalid(), StatusReport::decode(StatusRequest::FullStatus, &[0x00; 5]));
        assert_eq!(StatusReport::invalid(), StatusReport::decode(StatusRequest::Status, &[]));
        assert_eq!(StatusReport::invalid(), StatusReport::decode(StatusRequest::ErrorStatus, &[0x00, 0x00]));
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let report = StatusReport::decode(StatusRequest::Status, &[0x00]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(serde_json::json!({"is_online": true, "is_invalid_report": false}), json);
    }

    #[test]
    fn query_bytes() {
        assert_eq!(vec![0x10, 0x04, 0x14], StatusRequest::FullStatus.command());
        assert_eq!(vec![0x10, 0x04, 0x01], StatusRequest::Status.command());
    }
}
