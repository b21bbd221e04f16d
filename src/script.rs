//! Line-oriented gesture scripts for driving a canvas without a windowing host.
//!
//! Each non-empty line holds one command; `#` starts a comment.
//!
//! ```text
//! mode line             # pen, line, triangle, text, eraser, or an index 0-4
//! color rainbow         # a color name, #rrggbb, or rainbow
//! thickness thick       # thin, regular, thick, or pixels
//! background #202020
//! down 10 10
//! drag 20 15
//! up 40 40
//! clear
//! request-color stroke  # or background
//! text Hello there      # answers the oldest pending text request
//! pick red              # answers the oldest pending color request
//! cancel                # dismisses the oldest pending request
//! ```

use crate::draw::{Color, DrawSurface, name_to_color};
use crate::input::{
    CanvasController, ColorChoice, ColorTarget, DialogRequest, PointerEvent, ThicknessChoice,
};
use log::{debug, info};
use std::collections::VecDeque;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing or replaying a script. Line numbers start at 1.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: invalid coordinate '{value}'")]
    InvalidCoordinate { line: usize, value: String },

    #[error("line {line}: invalid color '{value}'")]
    InvalidColor { line: usize, value: String },

    #[error("line {line}: unknown request target '{value}', expected stroke or background")]
    InvalidTarget { line: usize, value: String },

    #[error("line {line}: no pending {kind} request to answer")]
    NoPendingRequest { line: usize, kind: &'static str },
}

/// One script instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Switch mode by name or index
    Mode(String),
    /// Change the stroke color
    Color(String),
    /// Change the stroke thickness
    Thickness(ThicknessChoice),
    /// Change the background color
    Background(Color),
    /// Feed a pointer event
    Pointer(PointerEvent),
    /// Fill the buffer with the background
    Clear,
    /// Ask the host for a color
    RequestColor(ColorTarget),
    /// Answer the oldest text request
    Text(String),
    /// Answer the oldest color request
    Pick(Color),
    /// Dismiss the oldest request of either kind
    Cancel,
}

/// Counters reported after a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Commands executed
    pub commands: usize,
    /// Dialog requests still unanswered when the script ended
    pub pending_requests: usize,
}

/// A parsed script, ready to replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    commands: Vec<(usize, Command)>,
}

impl Script {
    /// Parses a whole script.
    ///
    /// # Errors
    /// Returns the first malformed line.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut commands = Vec::new();
        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let content = strip_comment(raw).trim();
            if content.is_empty() {
                continue;
            }
            commands.push((line, parse_line(line, content)?));
        }
        debug!("Parsed {} script commands", commands.len());
        Ok(Self { commands })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().map(|(_, command)| command)
    }

    /// Runs every command against `controller` in order.
    ///
    /// Dialog requests raised by the controller queue up here and are answered
    /// by `text`, `pick` and `cancel`, oldest first.
    ///
    /// # Errors
    /// Fails when an answer has no matching pending request.
    pub fn replay<S: DrawSurface>(
        &self,
        controller: &mut CanvasController<S>,
    ) -> Result<ReplayStats, ScriptError> {
        let mut pending: VecDeque<DialogRequest> = VecDeque::new();

        for (line, command) in &self.commands {
            let line = *line;
            match command {
                Command::Mode(name) => match name.parse::<i32>() {
                    Ok(index) => {
                        controller.set_mode_index(index);
                    }
                    Err(_) => {
                        controller.set_mode_named(name);
                    }
                },
                Command::Color(name) => match name_to_color(name) {
                    Some(color) => controller.set_stroke_color(ColorChoice::Explicit(color)),
                    None => controller.set_stroke_color_named(name),
                },
                Command::Thickness(choice) => {
                    controller.set_stroke_thickness(*choice);
                }
                Command::Background(color) => controller.set_background_color(*color),
                Command::Pointer(event) => controller.handle_pointer(*event),
                Command::Clear => controller.clear(),
                Command::RequestColor(target) => controller.request_color(*target),
                Command::Text(text) => {
                    let request = take_oldest(&mut pending, line, "text", |request| {
                        matches!(request, DialogRequest::Text(_))
                    })?;
                    if let DialogRequest::Text(request) = request {
                        controller.complete_text(request, Some(text.clone()));
                    }
                }
                Command::Pick(color) => {
                    let request = take_oldest(&mut pending, line, "color", |request| {
                        matches!(request, DialogRequest::Color(_))
                    })?;
                    if let DialogRequest::Color(request) = request {
                        controller.complete_color(request, Some(*color));
                    }
                }
                Command::Cancel => match take_oldest(&mut pending, line, "dialog", |_| true)? {
                    DialogRequest::Text(request) => controller.complete_text(request, None),
                    DialogRequest::Color(request) => controller.complete_color(request, None),
                },
            }
            pending.extend(controller.take_pending_requests());
        }

        let stats = ReplayStats {
            commands: self.commands.len(),
            pending_requests: pending.len(),
        };
        info!(
            "Replayed {} commands, {} requests left unanswered",
            stats.commands, stats.pending_requests
        );
        Ok(stats)
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Removes the oldest pending request accepted by `wanted`.
fn take_oldest(
    pending: &mut VecDeque<DialogRequest>,
    line: usize,
    kind: &'static str,
    wanted: impl Fn(&DialogRequest) -> bool,
) -> Result<DialogRequest, ScriptError> {
    let index = pending.iter().position(wanted);
    index
        .and_then(|index| pending.remove(index))
        .ok_or(ScriptError::NoPendingRequest { line, kind })
}

fn parse_line(line: usize, content: &str) -> Result<Command, ScriptError> {
    let (keyword, rest) = match content.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (content, ""),
    };

    let missing = |command: &'static str, expected: &'static str| ScriptError::MissingArgument {
        line,
        command,
        expected,
    };

    let command = match keyword.to_lowercase().as_str() {
        "mode" => Command::Mode(required(rest).ok_or_else(|| missing("mode", "a mode name"))?),
        "color" => Command::Color(required(rest).ok_or_else(|| missing("color", "a color"))?),
        "thickness" => {
            let value = required(rest).ok_or_else(|| missing("thickness", "a size"))?;
            let choice = match value.parse::<i32>() {
                Ok(px) => ThicknessChoice::Pixels(px),
                Err(_) => ThicknessChoice::parse(&value),
            };
            Command::Thickness(choice)
        }
        "background" => {
            let value = required(rest).ok_or_else(|| missing("background", "a color"))?;
            Command::Background(parse_color(line, &value)?)
        }
        "down" => Command::Pointer(PointerEvent::down(parse_point(line, rest, "down")?)),
        "drag" => Command::Pointer(PointerEvent::drag(parse_point(line, rest, "drag")?)),
        "up" => Command::Pointer(PointerEvent::up(parse_point(line, rest, "up")?)),
        "clear" => Command::Clear,
        "request-color" => {
            let target = match rest.to_lowercase().as_str() {
                "stroke" => ColorTarget::Stroke,
                "background" => ColorTarget::Background,
                "" => return Err(missing("request-color", "stroke or background")),
                _ => {
                    return Err(ScriptError::InvalidTarget {
                        line,
                        value: rest.to_string(),
                    });
                }
            };
            Command::RequestColor(target)
        }
        "text" => Command::Text(rest.to_string()),
        "pick" => {
            let value = required(rest).ok_or_else(|| missing("pick", "a color"))?;
            Command::Pick(parse_color(line, &value)?)
        }
        "cancel" => Command::Cancel,
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: keyword.to_string(),
            });
        }
    };
    Ok(command)
}

/// Cuts a `#` comment that starts the line or is followed by whitespace, so
/// `#rrggbb` arguments survive.
fn strip_comment(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let start = raw.match_indices('#').map(|(index, _)| index).find(|&index| {
        let at_line_start = raw[..index].trim().is_empty();
        let followed_by_space = bytes
            .get(index + 1)
            .is_none_or(|next| next.is_ascii_whitespace());
        at_line_start || followed_by_space
    });
    match start {
        Some(index) => &raw[..index],
        None => raw,
    }
}

fn required(rest: &str) -> Option<String> {
    (!rest.is_empty()).then(|| rest.to_string())
}

fn parse_color(line: usize, value: &str) -> Result<Color, ScriptError> {
    name_to_color(value).ok_or_else(|| ScriptError::InvalidColor {
        line,
        value: value.to_string(),
    })
}

fn parse_point(line: usize, rest: &str, command: &'static str) -> Result<(i32, i32), ScriptError> {
    let mut coordinates = rest.split_whitespace().map(|value| {
        value
            .parse::<i32>()
            .map_err(|_| ScriptError::InvalidCoordinate {
                line,
                value: value.to_string(),
            })
    });

    match (coordinates.next(), coordinates.next(), coordinates.next()) {
        (Some(x), Some(y), None) => Ok((x?, y?)),
        _ => Err(ScriptError::MissingArgument {
            line,
            command,
            expected: "two coordinates",
        }),
    }
}
