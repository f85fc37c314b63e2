use serde_json::Value;

/// Payment-link responses are the gateway's body passed through, so the
/// checkout URL can sit under a few different keys. `intasend_response` is
/// unwrapped first when the server wrapped it.
pub fn extract_checkout_url(body: &Value) -> Option<String> {
    let resp = body.get("intasend_response").filter(|v| is_truthy(v)).unwrap_or(body);

    let candidates = [
        resp.get("data").and_then(|d| d.get("url")),
        resp.get("url"),
        resp.get("checkout_url"),
        resp.get("payment_url"),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

/// `null`, `false`, `0` and `""` count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn nested_data_url_takes_precedence() {
        let body = json!({
            "success": true,
            "intasend_response": {
                "data": {"url": "https://pay.example/data"},
                "url": "https://pay.example/top"
            }
        });
        assert_eq!(extract_checkout_url(&body).as_deref(), Some("https://pay.example/data"));
    }

    #[test]
    fn falls_through_keys_in_order() {
        let body = json!({"intasend_response": {"payment_url": "https://p", "checkout_url": "https://c"}});
        assert_eq!(extract_checkout_url(&body).as_deref(), Some("https://c"));

        let body = json!({"intasend_response": {"payment_url": "https://p"}});
        assert_eq!(extract_checkout_url(&body).as_deref(), Some("https://p"));
    }

    #[test]
    fn unwrapped_body_is_searched_too() {
        let body = json!({"url": "https://direct"});
        assert_eq!(extract_checkout_url(&body).as_deref(), Some("https://direct"));
    }

    #[test]
    fn empty_wrapper_falls_back_to_the_whole_body() {
        for wrapper in [json!(null), json!(false), json!(""), json!(0)] {
            let body = json!({"intasend_response": wrapper, "url": "https://pay.example/direct"});
            assert_eq!(
                extract_checkout_url(&body).as_deref(),
                Some("https://pay.example/direct"),
                "{wrapper}"
            );
        }
    }

    #[test]
    fn non_string_urls_are_skipped() {
        let body = json!({"intasend_response": {"url": 42, "data": {"url": null}, "id": "abc"}});
        assert_eq!(extract_checkout_url(&body), None);
    }
}
