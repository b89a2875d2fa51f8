use super::*;

mod offers_basic_challenge {
    use super::*;

    #[test]
    fn should_detect_basic_as_sole_challenge() {
        assert!(offers_basic_challenge("Basic realm=\"civils\""));
        assert!(offers_basic_challenge("basic"));
    }

    #[test]
    fn should_detect_basic_listed_after_another_scheme() {
        assert!(offers_basic_challenge("Bearer realm=\"a\", Basic realm=\"b\""));
        assert!(offers_basic_challenge("Bearer, Basic"));
    }

    #[test]
    fn should_ignore_basic_inside_quoted_params() {
        assert!(!offers_basic_challenge(
            "Bearer realm=\"api, Basic\", error=\"invalid_token\""
        ));
        assert!(!offers_basic_challenge("Bearer realm=\"say \\\"hi\\\", Basic\""));
    }

    #[test]
    fn should_keep_other_schemes() {
        assert!(!offers_basic_challenge("Bearer realm=\"civils\""));
        assert!(!offers_basic_challenge("Basically realm=\"x\""));
        assert!(!offers_basic_challenge(""));
    }
}

mod retain_values {
    use super::*;

    #[test]
    fn should_drop_only_rejected_values() {
        // Arrange
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));

        // Act
        retain_values(&mut headers, &SET_COOKIE, |value| value.starts_with("b="));

        // Assert
        let kept: Vec<&str> = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();
        assert_eq!(kept, vec!["b=2"]);
    }
}
