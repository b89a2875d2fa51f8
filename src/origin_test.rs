use super::*;

mod list {
    use super::*;

    #[test]
    fn when_values_contain_duplicates_should_keep_first_spelling() {
        // Arrange & Act
        let origin = Origin::list(["http://localhost:3000", "HTTP://LOCALHOST:3000"]);

        // Assert
        assert_eq!(origin.values(), ["http://localhost:3000".to_string()]);
    }

    #[test]
    fn when_values_contain_wildcard_should_become_any() {
        // Arrange & Act
        let origin = Origin::list(["http://localhost:3000", "*"]);

        // Assert
        assert!(origin.is_any());
    }

    #[test]
    fn when_value_has_trailing_slash_should_strip_it() {
        // Arrange & Act
        let origin = Origin::list(["https://app.example.com/"]);

        // Assert
        assert_eq!(origin.values(), ["https://app.example.com".to_string()]);
    }
}

mod resolve {
    use super::*;

    #[test]
    fn when_origin_missing_should_skip() {
        // Arrange
        let origin = Origin::list(["http://localhost:3000"]);

        // Act
        let decision = origin.resolve(None);

        // Assert
        assert_eq!(decision, OriginDecision::Skip);
    }

    #[test]
    fn when_origin_listed_should_mirror() {
        // Arrange
        let origin = Origin::list(["http://localhost:3000", "http://localhost:5173"]);

        // Act
        let decision = origin.resolve(Some("http://localhost:5173"));

        // Assert
        assert_eq!(decision, OriginDecision::Mirror);
    }

    #[test]
    fn when_origin_differs_in_case_should_mirror() {
        // Arrange
        let origin = Origin::list(["http://localhost:3000"]);

        // Act
        let decision = origin.resolve(Some("HTTP://LocalHost:3000"));

        // Assert
        assert_eq!(decision, OriginDecision::Mirror);
    }

    #[test]
    fn when_port_differs_should_disallow() {
        // Arrange
        let origin = Origin::list(["http://localhost:3000"]);

        // Act
        let decision = origin.resolve(Some("http://localhost:3001"));

        // Assert
        assert_eq!(decision, OriginDecision::Disallow);
    }

    #[test]
    fn when_subdomain_requested_should_disallow() {
        // Arrange
        let origin = Origin::list(["https://example.com"]);

        // Act
        let decision = origin.resolve(Some("https://api.example.com"));

        // Assert
        assert_eq!(decision, OriginDecision::Disallow);
    }

    #[test]
    fn when_origin_exceeds_maximum_length_should_disallow() {
        // Arrange
        let origin = Origin::any();
        let oversized = format!("https://{}.test", "a".repeat(MAX_ORIGIN_LENGTH));

        // Act
        let decision = origin.resolve(Some(&oversized));

        // Assert
        assert_eq!(decision, OriginDecision::Disallow);
    }

    #[test]
    fn when_any_configured_should_return_any() {
        // Arrange
        let origin = Origin::any();

        // Act
        let decision = origin.resolve(Some("https://anywhere.test"));

        // Assert
        assert_eq!(decision, OriginDecision::Any);
    }
}
