//! User-facing failure messages.
//!
//! The tracking service's audience reads Persian, so every message that can
//! reach an end user is kept here in one place.

/// Placeholder description for an event that reports no status text.
pub const UNKNOWN_STATUS: &str = "وضعیت نامشخص";

pub const EMPTY_BARCODE: &str = "کد رهگیری نباید خالی باشد.";
pub const CONNECTION_FAILED: &str = "امکان اتصال به سرویس رهگیری وجود ندارد.";
pub const EMPTY_RESPONSE: &str = "پاسخ خالی از سرویس رهگیری دریافت شد.";
pub const INVALID_RESPONSE: &str = "پاسخ نامعتبر از سرویس رهگیری دریافت شد.";
pub const UNSUPPORTED_STRUCTURE: &str = "ساختار پاسخ دریافتی پشتیبانی نمی‌شود.";
pub const NO_RESPONSE: &str = "پاسخی از سرویس رهگیری دریافت نشد.";

// Front-end barcode validation
pub const BARCODE_REQUIRED: &str = "لطفاً کد رهگیری را وارد کنید.";
pub const BARCODE_NOT_NUMERIC: &str = "کد رهگیری باید فقط شامل اعداد باشد.";
pub const BARCODE_BAD_LENGTH: &str = "طول کد رهگیری باید بین ۵ تا ۳۰ رقم باشد.";

/// Separator placed between distinct per-endpoint messages.
pub const MESSAGE_SEPARATOR: &str = "؛ ";

/// Message for a non-2xx upstream status.
pub fn status_code_message(code: u16) -> String {
    format!("کد وضعیت {code} از سرویس رهگیری دریافت شد.")
}
