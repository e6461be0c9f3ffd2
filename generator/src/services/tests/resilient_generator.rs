//! Tests for the ResilientGenerator retry wrapper

use super::fixtures::*;
use crate::core::RetryPolicy;
use crate::error::GeneratorError;
use crate::services::ResilientGenerator;
use crate::traits::MockTextProvider;
use shared::ApiFailure;

mod credential_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_makes_no_call() {
        let mut provider = MockTextProvider::new();
        provider.expect_generate_text().never();

        let generator = ResilientGenerator::new(provider, None, RetryPolicy::fast(3));
        let result = generator.generate("prompt", None).await;

        assert!(matches!(result, Err(GeneratorError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_empty_credentials_count_as_missing() {
        let mut provider = MockTextProvider::new();
        provider.expect_generate_text().never();

        let generator = ResilientGenerator::new(provider, Some(String::new()), RetryPolicy::fast(3));
        let result = generator.generate("prompt", Some("")).await;

        assert!(matches!(result, Err(GeneratorError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_explicit_credential_wins_over_fallback() {
        let provider = ScriptedProvider::new(vec![Ok("1. Title".to_string())]);
        let generator = ResilientGenerator::new(provider, Some("env-key".to_string()), RetryPolicy::fast(3));

        generator.generate("prompt", Some("user-key")).await.unwrap();

        assert_eq!(generator.provider().seen_keys(), vec!["user-key".to_string()]);
    }

    #[tokio::test]
    async fn test_fallback_credential_used_when_none_given() {
        let provider = ScriptedProvider::new(vec![Ok("1. Title".to_string())]);
        let generator = ResilientGenerator::new(provider, Some("env-key".to_string()), RetryPolicy::fast(3));

        generator.generate("prompt", None).await.unwrap();

        assert_eq!(generator.provider().seen_keys(), vec!["env-key".to_string()]);
    }
}

mod retry_tests {
    use super::*;

    #[tokio::test]
    async fn test_first_attempt_success_returns_payload_unmodified() {
        let mut provider = MockTextProvider::new();
        provider
            .expect_generate_text()
            .times(1)
            .returning(|_, _| Ok(create_provider_response("  1. Raw. 2. Text  ")));

        let generator = ResilientGenerator::new(provider, Some("key".to_string()), RetryPolicy::fast(3));
        let generated = generator.generate("the prompt", None).await.unwrap();

        assert_eq!(generated.content, "  1. Raw. 2. Text  ");
        assert_eq!(generated.attempts, 1);
        assert!(generated.failures.is_empty());
    }

    #[tokio::test]
    async fn test_success_on_third_attempt_after_two_failures() {
        let provider = ScriptedProvider::new(vec![
            Err(ApiFailure::NetworkError("connection reset".to_string())),
            Err(ApiFailure::RateLimitExceeded),
            Ok("1. Third Time Lucky".to_string()),
        ]);
        let generator = ResilientGenerator::new(provider, Some("key".to_string()), RetryPolicy::fast(3));

        let generated = generator.generate("prompt", None).await.unwrap();

        assert_eq!(generated.content, "1. Third Time Lucky");
        assert_eq!(generated.attempts, 3);
        assert_eq!(
            generated.failures,
            vec![
                ApiFailure::NetworkError("connection reset".to_string()),
                ApiFailure::RateLimitExceeded,
            ]
        );
        assert_eq!(generator.provider().calls(), 3);
    }

    #[tokio::test]
    async fn test_all_attempts_fail_surfaces_last_failure() {
        let provider = ScriptedProvider::new(vec![
            Err(ApiFailure::Timeout),
            Err(ApiFailure::ServiceUnavailable),
            Err(ApiFailure::AuthenticationFailed),
            Ok("never reached".to_string()),
        ]);
        let generator = ResilientGenerator::new(provider, Some("key".to_string()), RetryPolicy::fast(3));

        let result = generator.generate("prompt", None).await;

        match result {
            Err(GeneratorError::GenerationFailed { attempts, reason }) => {
                assert_eq!(attempts, 3);
                assert_eq!(reason, ApiFailure::AuthenticationFailed);
            }
            other => panic!("Expected GenerationFailed, got {:?}", other),
        }
        assert_eq!(generator.provider().calls(), 3);
    }

    #[tokio::test]
    async fn test_attempt_cap_follows_policy() {
        let mut provider = MockTextProvider::new();
        provider
            .expect_generate_text()
            .times(1)
            .returning(|_, _| Err(ApiFailure::QuotaExceeded));

        let generator = ResilientGenerator::new(provider, Some("key".to_string()), RetryPolicy::fast(1));
        let result = generator.generate("prompt", None).await;

        assert!(matches!(
            result,
            Err(GeneratorError::GenerationFailed { attempts: 1, reason: ApiFailure::QuotaExceeded })
        ));
    }
}

mod backoff_tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    const TIMER_SLACK: Duration = Duration::from_millis(10);

    fn always_failing(times: usize) -> MockTextProvider {
        let mut provider = MockTextProvider::new();
        provider
            .expect_generate_text()
            .times(times)
            .returning(|_, _| Err(ApiFailure::ServiceUnavailable));
        provider
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_between_attempts_within_policy_bounds() {
        let policy = RetryPolicy::default();
        let min_total = policy.min_delay * 2;
        let max_total = policy.backoff_ceiling(1) + policy.backoff_ceiling(2);
        let generator = ResilientGenerator::new(always_failing(3), Some("key".to_string()), policy);

        let start = Instant::now();
        let result = generator.generate("prompt", None).await;
        let elapsed = start.elapsed();

        assert!(matches!(result, Err(GeneratorError::GenerationFailed { attempts: 3, .. })));
        assert!(elapsed >= min_total, "waited only {elapsed:?}");
        assert!(elapsed <= max_total + TIMER_SLACK, "waited {elapsed:?}, ceiling {max_total:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_wait_after_final_failed_attempt() {
        let policy = RetryPolicy {
            max_attempts: 2,
            ..RetryPolicy::default()
        };
        let single_wait = policy.backoff_ceiling(1);
        let generator = ResilientGenerator::new(always_failing(2), Some("key".to_string()), policy);

        let start = Instant::now();
        let result = generator.generate("prompt", None).await;
        let elapsed = start.elapsed();

        assert!(matches!(result, Err(GeneratorError::GenerationFailed { attempts: 2, .. })));
        // One wait of exactly the minimum; a trailing wait would add at least another second
        assert!(elapsed >= single_wait, "waited only {elapsed:?}");
        assert!(elapsed < single_wait * 2, "waited {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success_does_not_wait() {
        let mut provider = MockTextProvider::new();
        provider
            .expect_generate_text()
            .times(1)
            .returning(|_, _| Ok(create_provider_response("1. Instant")));
        let generator = ResilientGenerator::new(provider, Some("key".to_string()), RetryPolicy::default());

        let start = Instant::now();
        generator.generate("prompt", None).await.unwrap();

        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
