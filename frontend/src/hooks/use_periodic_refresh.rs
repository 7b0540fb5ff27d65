use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Configuration for periodic refresh behavior
#[derive(Clone, PartialEq)]
pub struct PeriodicRefreshConfig {
    pub interval_ms: u32,
    /// Fire once as soon as the timer starts instead of waiting a full interval
    pub run_immediately: bool,
}

impl Default for PeriodicRefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: 600000,    // 10 minutes (600 seconds)
            run_immediately: false,
        }
    }
}

/// Hook that calls `refresh_fn` every `config.interval_ms` while not paused.
///
/// The interval is dropped (and therefore cancelled) when the component
/// unmounts, when it is paused, or when the interval changes. The latest
/// `refresh_fn` is always the one invoked, so callers can pass a freshly
/// built callback on every render.
#[hook]
pub fn use_periodic_refresh(
    config: PeriodicRefreshConfig,
    refresh_fn: Callback<()>,
    pause_when: bool,
) {
    let latest_refresh = use_mut_ref(|| refresh_fn.clone());
    *latest_refresh.borrow_mut() = refresh_fn;

    {
        let latest_refresh = latest_refresh.clone();

        use_effect_with((config, pause_when), move |(config, is_paused)| {
            let interval = if *is_paused {
                None
            } else {
                Logger::debug_with_component(
                    "periodic-refresh-hook",
                    &format!("Starting timer every {}ms", config.interval_ms),
                );

                if config.run_immediately {
                    let refresh = latest_refresh.borrow().clone();
                    refresh.emit(());
                }

                let tick_refresh = latest_refresh.clone();
                Some(Interval::new(config.interval_ms, move || {
                    let refresh = tick_refresh.borrow().clone();
                    refresh.emit(());
                }))
            };

            move || {
                if interval.is_some() {
                    Logger::debug_with_component("periodic-refresh-hook", "Timer cancelled");
                }
                drop(interval);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PeriodicRefreshConfig::default();
        assert_eq!(config.interval_ms, 600000); // 10 minutes
        assert!(!config.run_immediately);
    }

    #[test]
    fn test_config_hourly() {
        let config = PeriodicRefreshConfig {
            interval_ms: 3_600_000,
            ..PeriodicRefreshConfig::default()
        };
        assert_eq!(config.interval_ms, 3_600_000);
    }
}
