use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("Company storage is currently unavailable")]
    StorageUnavailable,
}

impl actix_web::error::ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn it_maps_errors_to_status_codes() {
        assert_eq!(
            RegistryError::BadClientData("EOF while parsing".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistryError::StorageUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn it_renders_the_message_as_body() {
        let res = RegistryError::StorageUnavailable.error_response();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
