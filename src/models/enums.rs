//! Shared status enumerations.
//!
//! Every status is stored and exchanged as its exact API code (the original
//! dashboard mixes lowercase and uppercase codes per entity, preserved here)
//! and carries the Vietnamese label the dashboard displays. `label()` and
//! `from_label()` are exact inverses for every variant.

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// Room status codes (lowercase on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Active,
    Inactive,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Active => "active",
            RoomStatus::Inactive => "inactive",
            RoomStatus::Maintenance => "maintenance",
        }
    }

    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            RoomStatus::Active => "Hoạt động",
            RoomStatus::Inactive => "Ngừng hoạt động",
            RoomStatus::Maintenance => "Bảo trì",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Hoạt động" => Some(RoomStatus::Active),
            "Ngừng hoạt động" => Some(RoomStatus::Inactive),
            "Bảo trì" => Some(RoomStatus::Maintenance),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(RoomStatus::Active),
            "inactive" => Ok(RoomStatus::Inactive),
            "maintenance" => Ok(RoomStatus::Maintenance),
            _ => Err(format!("Invalid room status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for RoomStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for RoomStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for RoomStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Room asset status codes (uppercase on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Active,
    Inactive,
    Maintenance,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Active => "ACTIVE",
            AssetStatus::Inactive => "INACTIVE",
            AssetStatus::Maintenance => "MAINTENANCE",
        }
    }

    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Hoạt động",
            AssetStatus::Inactive => "Ngừng sử dụng",
            AssetStatus::Maintenance => "Bảo trì",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Hoạt động" => Some(AssetStatus::Active),
            "Ngừng sử dụng" => Some(AssetStatus::Inactive),
            "Bảo trì" => Some(AssetStatus::Maintenance),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(AssetStatus::Active),
            "INACTIVE" => Ok(AssetStatus::Inactive),
            "MAINTENANCE" => Ok(AssetStatus::Maintenance),
            _ => Err(format!("Invalid asset status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for AssetStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for AssetStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for AssetStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// DeviceStatus
// ---------------------------------------------------------------------------

/// Borrowable device status codes (uppercase on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    Active,
    Inactive,
    Maintenance,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Active => "ACTIVE",
            DeviceStatus::Inactive => "INACTIVE",
            DeviceStatus::Maintenance => "MAINTENANCE",
        }
    }

    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            DeviceStatus::Active => "Sẵn sàng",
            DeviceStatus::Inactive => "Ngừng sử dụng",
            DeviceStatus::Maintenance => "Đang sửa chữa",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Sẵn sàng" => Some(DeviceStatus::Active),
            "Ngừng sử dụng" => Some(DeviceStatus::Inactive),
            "Đang sửa chữa" => Some(DeviceStatus::Maintenance),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeviceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(DeviceStatus::Active),
            "INACTIVE" => Ok(DeviceStatus::Inactive),
            "MAINTENANCE" => Ok(DeviceStatus::Maintenance),
            _ => Err(format!("Invalid device status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for DeviceStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for DeviceStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for DeviceStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// IncidentStatus
// ---------------------------------------------------------------------------

/// Incident report status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    Pending,
    InProgress,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Pending => "PENDING",
            IncidentStatus::InProgress => "IN_PROGRESS",
            IncidentStatus::Resolved => "RESOLVED",
        }
    }

    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Pending => "Chờ xử lý",
            IncidentStatus::InProgress => "Đang xử lý",
            IncidentStatus::Resolved => "Đã xử lý",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Chờ xử lý" => Some(IncidentStatus::Pending),
            "Đang xử lý" => Some(IncidentStatus::InProgress),
            "Đã xử lý" => Some(IncidentStatus::Resolved),
            _ => None,
        }
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for IncidentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(IncidentStatus::Pending),
            "IN_PROGRESS" => Ok(IncidentStatus::InProgress),
            "RESOLVED" => Ok(IncidentStatus::Resolved),
            _ => Err(format!("Invalid incident status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for IncidentStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for IncidentStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for IncidentStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Borrow ticket status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Borrowing,
    Returned,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Borrowing => "BORROWING",
            TicketStatus::Returned => "RETURNED",
        }
    }

    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Borrowing => "Đang mượn",
            TicketStatus::Returned => "Đã trả",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Đang mượn" => Some(TicketStatus::Borrowing),
            "Đã trả" => Some(TicketStatus::Returned),
            _ => None,
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BORROWING" => Ok(TicketStatus::Borrowing),
            "RETURNED" => Ok(TicketStatus::Returned),
            _ => Err(format!("Invalid ticket status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for TicketStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for TicketStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for TicketStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// ScheduleStatus
// ---------------------------------------------------------------------------

/// Room booking status codes (lowercase on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Pending,
    Approved,
    Rejected,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "pending",
            ScheduleStatus::Approved => "approved",
            ScheduleStatus::Rejected => "rejected",
        }
    }

    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "Chờ duyệt",
            ScheduleStatus::Approved => "Đã duyệt",
            ScheduleStatus::Rejected => "Từ chối",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Chờ duyệt" => Some(ScheduleStatus::Pending),
            "Đã duyệt" => Some(ScheduleStatus::Approved),
            "Từ chối" => Some(ScheduleStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ScheduleStatus::Pending),
            "approved" => Ok(ScheduleStatus::Approved),
            "rejected" => Ok(ScheduleStatus::Rejected),
            _ => Err(format!("Invalid schedule status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for ScheduleStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for ScheduleStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for ScheduleStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_status_label_round_trip() {
        for status in [
            RoomStatus::Active,
            RoomStatus::Inactive,
            RoomStatus::Maintenance,
        ] {
            assert_eq!(RoomStatus::from_label(status.label()), Some(status));
            assert_eq!(status.as_str().parse::<RoomStatus>(), Ok(status));
        }
    }

    #[test]
    fn asset_status_label_round_trip() {
        for status in [
            AssetStatus::Active,
            AssetStatus::Inactive,
            AssetStatus::Maintenance,
        ] {
            assert_eq!(AssetStatus::from_label(status.label()), Some(status));
            assert_eq!(status.as_str().parse::<AssetStatus>(), Ok(status));
        }
    }

    #[test]
    fn device_status_label_round_trip() {
        for status in [
            DeviceStatus::Active,
            DeviceStatus::Inactive,
            DeviceStatus::Maintenance,
        ] {
            assert_eq!(DeviceStatus::from_label(status.label()), Some(status));
            assert_eq!(status.as_str().parse::<DeviceStatus>(), Ok(status));
        }
    }

    #[test]
    fn incident_status_label_round_trip() {
        for status in [
            IncidentStatus::Pending,
            IncidentStatus::InProgress,
            IncidentStatus::Resolved,
        ] {
            assert_eq!(IncidentStatus::from_label(status.label()), Some(status));
            assert_eq!(status.as_str().parse::<IncidentStatus>(), Ok(status));
        }
    }

    #[test]
    fn ticket_status_label_round_trip() {
        for status in [TicketStatus::Borrowing, TicketStatus::Returned] {
            assert_eq!(TicketStatus::from_label(status.label()), Some(status));
            assert_eq!(status.as_str().parse::<TicketStatus>(), Ok(status));
        }
    }

    #[test]
    fn schedule_status_label_round_trip() {
        for status in [
            ScheduleStatus::Pending,
            ScheduleStatus::Approved,
            ScheduleStatus::Rejected,
        ] {
            assert_eq!(ScheduleStatus::from_label(status.label()), Some(status));
            assert_eq!(status.as_str().parse::<ScheduleStatus>(), Ok(status));
        }
    }

    #[test]
    fn wire_codes_preserve_original_casing() {
        assert_eq!(RoomStatus::Maintenance.as_str(), "maintenance");
        assert_eq!(AssetStatus::Maintenance.as_str(), "MAINTENANCE");
        assert_eq!(TicketStatus::Borrowing.as_str(), "BORROWING");
        assert_eq!(ScheduleStatus::Pending.as_str(), "pending");
    }

    #[test]
    fn unknown_codes_and_labels_are_rejected() {
        assert!("ARCHIVED".parse::<AssetStatus>().is_err());
        assert!("Maintenance".parse::<RoomStatus>().is_err());
        assert_eq!(ScheduleStatus::from_label("Không rõ"), None);
    }
}
