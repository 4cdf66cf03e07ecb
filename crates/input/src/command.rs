//! Line-oriented text commands for terminal front ends.
//!
//! ```text
//! place <x> <y> <z> <face>     place selected block against a face
//! break <x> <y> <z>            break a voxel
//! select <1-5|kind>            choose hotbar slot
//! mode                         toggle build/destroy
//! build <px> <py> <pz> <fx> <fy> <fz>   quick-build ahead of a pose
//! dig <px> <py> <pz>           dig below a position
//! quit
//! ```
//!
//! Blank lines and lines starting with `#` parse to `Action::Noop`.

use blockyard_common::{BlockKind, ParseFaceError, VoxelCoord};
use glam::Vec3;
use std::str::FromStr;

use crate::Action;

/// Errors from parsing a text command.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{command} takes {expected} arguments, got {found}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("not a number: {0}")]
    InvalidNumber(String),
    #[error(transparent)]
    InvalidFace(#[from] ParseFaceError),
    #[error("not a hotbar slot or block kind: {0}")]
    InvalidSelection(String),
}

/// Parse one command line into an action.
pub fn parse_command(line: &str) -> Result<Action, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Action::Noop);
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Action::Noop);
    };
    let args: Vec<&str> = words.collect();

    match head.to_ascii_lowercase().as_str() {
        "place" => {
            arity("place", &args, 4)?;
            Ok(Action::Place {
                target: coord(&args[..3])?,
                face: args[3].parse()?,
            })
        }
        "break" => {
            arity("break", &args, 3)?;
            Ok(Action::Break {
                target: coord(&args)?,
            })
        }
        "select" => {
            arity("select", &args, 1)?;
            selection(args[0]).map(Action::SelectSlot)
        }
        "mode" | "tab" => {
            arity("mode", &args, 0)?;
            Ok(Action::ToggleMode)
        }
        "build" => {
            arity("build", &args, 6)?;
            Ok(Action::QuickBuild {
                position: vec3(&args[..3])?,
                forward: vec3(&args[3..])?,
            })
        }
        "dig" => {
            arity("dig", &args, 3)?;
            Ok(Action::DigDown {
                position: vec3(&args)?,
            })
        }
        "quit" | "exit" => Ok(Action::Quit),
        _ => Err(ParseError::UnknownCommand(head.to_string())),
    }
}

fn arity(command: &'static str, args: &[&str], expected: usize) -> Result<(), ParseError> {
    if args.len() != expected {
        return Err(ParseError::WrongArity {
            command,
            expected,
            found: args.len(),
        });
    }
    Ok(())
}

fn number<T: FromStr>(word: &str) -> Result<T, ParseError> {
    word.parse()
        .map_err(|_| ParseError::InvalidNumber(word.to_string()))
}

fn coord(args: &[&str]) -> Result<VoxelCoord, ParseError> {
    Ok(VoxelCoord::new(
        number(args[0])?,
        number(args[1])?,
        number(args[2])?,
    ))
}

fn vec3(args: &[&str]) -> Result<Vec3, ParseError> {
    Ok(Vec3::new(
        number(args[0])?,
        number(args[1])?,
        number(args[2])?,
    ))
}

fn selection(word: &str) -> Result<u8, ParseError> {
    if let Ok(slot) = word.parse::<u8>() {
        return Ok(slot);
    }
    word.parse::<BlockKind>()
        .map(BlockKind::slot)
        .map_err(|_| ParseError::InvalidSelection(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockyard_common::Face;

    #[test]
    fn parses_place() {
        assert_eq!(
            parse_command("place 1 0 -2 up").unwrap(),
            Action::Place {
                target: VoxelCoord::new(1, 0, -2),
                face: Face::PosY,
            }
        );
    }

    #[test]
    fn parses_break_and_dig() {
        assert_eq!(
            parse_command("break 4 2 4").unwrap(),
            Action::Break {
                target: VoxelCoord::new(4, 2, 4)
            }
        );
        assert_eq!(
            parse_command("  DIG 12.5 3 12.5 ").unwrap(),
            Action::DigDown {
                position: Vec3::new(12.5, 3.0, 12.5)
            }
        );
    }

    #[test]
    fn parses_build_pose() {
        assert_eq!(
            parse_command("build 0 1 0 0 0 -1").unwrap(),
            Action::QuickBuild {
                position: Vec3::new(0.0, 1.0, 0.0),
                forward: Vec3::NEG_Z,
            }
        );
    }

    #[test]
    fn select_accepts_slot_or_kind() {
        assert_eq!(parse_command("select 3").unwrap(), Action::SelectSlot(3));
        assert_eq!(parse_command("select gold").unwrap(), Action::SelectSlot(5));
        assert!(matches!(
            parse_command("select dirt"),
            Err(ParseError::InvalidSelection(_))
        ));
    }

    #[test]
    fn blank_and_comment_lines_are_noop() {
        assert_eq!(parse_command("").unwrap(), Action::Noop);
        assert_eq!(parse_command("   ").unwrap(), Action::Noop);
        assert_eq!(parse_command("# dig a hole").unwrap(), Action::Noop);
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            parse_command("jump"),
            Err(ParseError::UnknownCommand("jump".into()))
        );
        assert_eq!(
            parse_command("break 1 2"),
            Err(ParseError::WrongArity {
                command: "break",
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(
            parse_command("break 1 two 3"),
            Err(ParseError::InvalidNumber("two".into()))
        );
        assert!(matches!(
            parse_command("place 0 0 0 sideways"),
            Err(ParseError::InvalidFace(_))
        ));
    }

    #[test]
    fn mode_and_quit() {
        assert_eq!(parse_command("mode").unwrap(), Action::ToggleMode);
        assert_eq!(parse_command("quit").unwrap(), Action::Quit);
    }
}
