//! The worker's one computation and the event it reports for it.
use crate::remote::Dispatcher;
use crate::types::{PowerResult, Severity};
use std::num::ParseIntError;
use std::sync::Arc;

/// Computes squares and reports each one through a `Dispatcher`.
#[derive(Clone)]
pub struct Calculator {
    dispatcher: Arc<Dispatcher>,
}

impl Calculator {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Returns `number` squared.
    ///
    /// The square is widened to 128 bits so every `i64` input has a result.
    /// Reporting is fire-and-forget; its outcome does not affect the return
    /// value.
    pub fn power_of_2(&self, number: i64) -> PowerResult {
        let power_of_2 = i128::from(number) * i128::from(number);

        self.dispatcher.dispatch(
            format!(
                "Calculated power of 2 for number: {}, result: {}",
                number, power_of_2
            ),
            Severity::Info,
            Vec::new(),
        );

        PowerResult { number, power_of_2 }
    }
}

/// Parses user input as a signed integer, ignoring surrounding whitespace.
pub fn parse_number(input: &str) -> Result<i64, ParseIntError> {
    input.trim().parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::testing::MockTransport;
    use crate::remote::DispatcherConfig;
    use std::time::Duration;

    fn calculator(transport: Arc<MockTransport>) -> Calculator {
        let dispatcher = Dispatcher::with_transport(
            DispatcherConfig::new("http://127.0.0.1:4002/log", "InteractiveServer"),
            transport,
        )
        .unwrap();
        Calculator::new(Arc::new(dispatcher))
    }

    #[tokio::test]
    async fn squares_and_reports_once() {
        let transport = Arc::new(MockTransport::default());
        let calculator = calculator(transport.clone());

        let result = calculator.power_of_2(7);
        assert_eq!(result, PowerResult { number: 7, power_of_2: 49 });

        tokio::time::timeout(Duration::from_secs(1), transport.done.notified())
            .await
            .unwrap();

        let events = transport.events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].message(),
            "Calculated power of 2 for number: 7, result: 49"
        );
        assert_eq!(events[0].server_name(), "InteractiveServer");
        assert_eq!(events[0].level(), Severity::Info);
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        let calculator = calculator(Arc::new(MockTransport::default()));

        assert_eq!(
            calculator.power_of_2(i64::MIN).power_of_2,
            i128::from(i64::MIN) * i128::from(i64::MIN)
        );
        assert_eq!(calculator.power_of_2(-3).power_of_2, 9);
    }

    #[test]
    fn parses_integers_only() {
        assert_eq!(parse_number(" 42 "), Ok(42));
        assert_eq!(parse_number("-5"), Ok(-5));
        assert!(parse_number("4.2").is_err());
        assert!(parse_number("abc").is_err());
        assert!(parse_number("").is_err());
    }
}
