//! Status routing for each documented endpoint.
//!
//! The HTTP layer passes these to [`reader_model::decode_response`] together
//! with the success shape and [`ErrorResponse`](crate::system::ErrorResponse).

use reader_model::StatusRoutes;

/// `GET /gpio/inputs`
pub const GPI_STATUS: StatusRoutes = StatusRoutes::new(&[200], &[400, 500]);

/// `GET`/`PUT /gpio/outputs/configuration`
pub const GPO_CONFIGURATION: StatusRoutes = StatusRoutes::new(&[200, 204], &[400, 403, 500]);

/// `POST /gpio/outputs/pulse`
pub const GPO_PULSE: StatusRoutes = StatusRoutes::new(&[202, 204], &[400, 403, 409, 500]);

/// `PUT /system/beeper`
pub const BEEPER: StatusRoutes = StatusRoutes::new(&[204], &[400, 500]);

/// `GET /system/antennas`
pub const ANTENNA_STATUS: StatusRoutes = StatusRoutes::new(&[200], &[500]);

/// `GET /status`
pub const READER_STATUS: StatusRoutes = StatusRoutes::new(&[200], &[500]);

/// `GET`/`PUT /profiles/operating-mode`
pub const OPERATING_MODE: StatusRoutes = StatusRoutes::new(&[200, 204], &[400, 403, 409, 500]);

#[cfg(test)]
mod tests {
    use super::*;
    use reader_model::Route;

    #[test]
    fn test_operating_mode_routes() {
        assert_eq!(OPERATING_MODE.route(204), Route::Success);
        assert_eq!(OPERATING_MODE.route(409), Route::Failure);
        assert_eq!(OPERATING_MODE.route(404), Route::Unexpected);
    }

    #[test]
    fn test_beeper_has_no_body_on_success() {
        assert_eq!(BEEPER.route(204), Route::Success);
        assert_eq!(BEEPER.route(200), Route::Unexpected);
    }
}
