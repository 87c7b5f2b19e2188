//! HTTP status classes for error kinds

use crate::Kind;
use http::StatusCode;

impl Kind {
    /// Maps this kind to the HTTP status an API should answer with.
    ///
    /// Total over every kind. Anything not listed explicitly is a
    /// `500 Internal Server Error`.
    pub fn status_code(self) -> StatusCode {
        match self {
            Kind::Invalid | Kind::Decrypt | Kind::Unmarshal => StatusCode::BAD_REQUEST,
            Kind::Permission | Kind::Private => StatusCode::UNAUTHORIZED,
            Kind::Transient => StatusCode::SERVICE_UNAVAILABLE,
            Kind::NotExist => StatusCode::NOT_FOUND,
            Kind::Unsupported => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Kind::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            Kind::Duplicated => StatusCode::CONFLICT,
            Kind::Unknown | Kind::Internal | Kind::Io => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
