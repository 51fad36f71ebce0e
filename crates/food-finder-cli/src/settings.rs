//! Runtime settings from the environment and command line.
//!
//! Environment variables set the defaults, flags override them:
//!
//! | flag                      | variable                | default |
//! |---------------------------|-------------------------|---------|
//! | `--grid-size N`           | `FOOD_FINDER_GRID_SIZE` | 10      |
//! | `--max-steps N`           | `FOOD_FINDER_MAX_STEPS` | 15      |
//! | `--seed N`                | `FOOD_FINDER_SEED`      | random  |
//! | `--json`                  |                         | off     |
//! | `--auto [greedy\|random]` |                         | off     |

use anyhow::{bail, Context};
use food_finder_core::{AgentStrategy, GameConfig};
use std::str::FromStr;

/// How the session is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full-screen keypress play
    Interactive,
    /// JSON requests on stdin, JSON replies on stdout
    Json,
    /// An agent plays until the game ends
    Auto(AgentStrategy),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: GameConfig,
    pub seed: Option<u64>,
    pub mode: Mode,
}

impl Settings {
    /// Read settings from the process environment and arguments
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    pub fn load<I, F>(args: I, env: F) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = GameConfig::default();
        let mut seed = None;
        let mut mode = Mode::Interactive;

        if let Some(value) = env("FOOD_FINDER_GRID_SIZE") {
            config.grid_size = parse_value("FOOD_FINDER_GRID_SIZE", &value)?;
        }
        if let Some(value) = env("FOOD_FINDER_MAX_STEPS") {
            config.max_steps = parse_value("FOOD_FINDER_MAX_STEPS", &value)?;
        }
        if let Some(value) = env("FOOD_FINDER_SEED") {
            seed = Some(parse_value("FOOD_FINDER_SEED", &value)?);
        }

        let mut args = args.into_iter().peekable();
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };

            match flag.as_str() {
                "--grid-size" => {
                    config.grid_size = parse_value(&flag, &flag_value(&flag, inline, &mut args)?)?
                }
                "--max-steps" => {
                    config.max_steps = parse_value(&flag, &flag_value(&flag, inline, &mut args)?)?
                }
                "--seed" => {
                    seed = Some(parse_value(&flag, &flag_value(&flag, inline, &mut args)?)?)
                }
                "--json" => mode = Mode::Json,
                "--auto" => {
                    // Strategy is optional: `--auto`, `--auto=random` or `--auto random`
                    let name = inline.or_else(|| {
                        args.next_if(|next| matches!(next.as_str(), "greedy" | "random"))
                    });
                    let strategy = match name.as_deref() {
                        None | Some("greedy") => AgentStrategy::Greedy,
                        Some("random") => AgentStrategy::Random,
                        Some(other) => bail!("unknown agent strategy {:?}", other),
                    };
                    mode = Mode::Auto(strategy);
                }
                other => bail!("unknown argument {:?}", other),
            }
        }

        config.validate()?;

        Ok(Self { config, seed, mode })
    }
}

/// The value of `--flag=value` or of `--flag value`
fn flag_value<I>(name: &str, inline: Option<String>, args: &mut I) -> anyhow::Result<String>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| args.next())
        .with_context(|| format!("{} needs a value", name))
}

fn parse_value<T>(name: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid value {:?} for {}", value, name))
}
