use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

fn default_min_orders() -> u32 {
    1
}

fn default_max_orders() -> u32 {
    5
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Config {
    pub queue_url: String,
    #[serde(default = "default_min_orders")]
    pub min_orders: u32,
    #[serde(default = "default_max_orders")]
    pub max_orders: u32,
    #[serde(default = "default_enabled", deserialize_with = "flag_from_env")]
    pub enabled: bool,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["QUEUE_URL", "MIN_ORDERS", "MAX_ORDERS", "ENABLED"]))
            .extract()
    }
}

// ENABLED is case-insensitive: the string "true" in any casing enables the
// producer, anything else disables it.
fn flag_from_env<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct FlagVisitor;

    impl serde::de::Visitor<'_> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a boolean or a true/false string")
        }

        fn visit_bool<E>(self, value: bool) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_str<E>(self, value: &str) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(value.eq_ignore_ascii_case("true"))
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn when_only_queue_url_is_set_should_apply_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env(
                "QUEUE_URL",
                "https://sqs.eu-west-1.amazonaws.com/123456789012/orders",
            );

            let config = Config::load()?;

            assert_eq!(
                config.queue_url,
                "https://sqs.eu-west-1.amazonaws.com/123456789012/orders"
            );
            assert_eq!(config.min_orders, 1);
            assert_eq!(config.max_orders, 5);
            assert!(config.enabled);

            Ok(())
        });
    }

    #[test]
    fn when_queue_url_is_missing_should_fail_to_load() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("MIN_ORDERS", "2");

            assert!(Config::load().is_err());

            Ok(())
        });
    }

    #[test]
    fn when_all_values_are_set_should_use_them() {
        figment::Jail::expect_with(|jail| {
            jail.set_env(
                "QUEUE_URL",
                "https://sqs.eu-west-1.amazonaws.com/123456789012/orders",
            );
            jail.set_env("MIN_ORDERS", "2");
            jail.set_env("MAX_ORDERS", "4");
            jail.set_env("ENABLED", "false");

            let config = Config::load()?;

            assert_eq!(config.min_orders, 2);
            assert_eq!(config.max_orders, 4);
            assert!(!config.enabled);

            Ok(())
        });
    }

    #[test]
    fn when_enabled_flag_is_uppercase_true_should_enable() {
        figment::Jail::expect_with(|jail| {
            jail.set_env(
                "QUEUE_URL",
                "https://sqs.eu-west-1.amazonaws.com/123456789012/orders",
            );
            jail.set_env("ENABLED", "TRUE");

            let config = Config::load()?;

            assert!(config.enabled);

            Ok(())
        });
    }

    #[test]
    fn when_enabled_flag_is_anything_else_should_disable() {
        figment::Jail::expect_with(|jail| {
            jail.set_env(
                "QUEUE_URL",
                "https://sqs.eu-west-1.amazonaws.com/123456789012/orders",
            );
            jail.set_env("ENABLED", "yes");

            let config = Config::load()?;

            assert!(!config.enabled);

            Ok(())
        });
    }
}
