//! Field-name aliases used by the known upstream response variants.
//!
//! Each list is tried in order and the first truthy value wins. Supporting a new
//! endpoint variant usually means appending a key here.

/// Keys that wrap the actual tracking object one level down.
pub const WRAPPER_KEYS: &[&str] = &["result", "Result", "data", "Data"];

/// Keys that may hold the event history array.
pub const EVENT_LIST_KEYS: &[&str] = &[
    "events",
    "Events",
    "history",
    "History",
    "tracks",
    "Tracks",
    "barCodeDetails",
    "TraceDetails",
    "details",
    "Details",
];

// Per-event fields
pub const DESCRIPTION_KEYS: &[&str] = &[
    "status",
    "state",
    "eventDescription",
    "Description",
    "desc",
    "StatusDescription",
];
pub const DATE_KEYS: &[&str] = &["date", "eventDate", "EventDate", "date_sh", "Date"];
pub const TIME_KEYS: &[&str] = &["time", "eventTime", "EventTime", "time_sh", "Time"];
pub const LOCATION_KEYS: &[&str] = &[
    "location",
    "office",
    "EventOffice",
    "EventPlace",
    "Place",
    "Location",
];

// Parcel-level fields
pub const SENDER_KEYS: &[&str] = &["sender", "SenderName", "senderName", "Sender"];
// "reciverName" is a misspelling one upstream variant really uses
pub const RECEIVER_KEYS: &[&str] = &[
    "receiver",
    "ReceiverName",
    "reciverName",
    "receiverName",
    "Receiver",
];
pub const CURRENT_STATUS_KEYS: &[&str] = &[
    "currentStatus",
    "CurrentStatus",
    "status",
    "State",
    "last_state",
    "Status",
];
