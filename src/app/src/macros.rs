/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.error_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.selected, None;
///     model.error_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for POST requests to the device with a plain-text body and a JSON answer.
/// Device endpoints are unauthenticated; the response is wrapped into the
/// given domain event as `Result<T, FetchError>`.
///
/// NOTE: URLs are prefixed with `http://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// device_post!(Scan, ScanEvent, SCAN_ENDPOINT, FetchResponse,
///     body_string: SCAN_REQUEST_MARKER,
///     expect_json: ScanResponse
/// )
/// ```
#[macro_export]
macro_rules! device_post {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, body_string: $body:expr, expect_json: $response_type:ty) => {{
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::post($crate::build_url($endpoint))
                .header("Content-Type", "text/plain")
                .body_string($body.to_string())
                .build()
                .then_send(|result| {
                    let event_result: Result<$response_type, $crate::types::FetchError> =
                        $crate::process_json_response(result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
        ])
    }};
}
