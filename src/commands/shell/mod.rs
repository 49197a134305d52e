//! Interactive shell - the default command
//!
//! A line-oriented stand-in for the map and list surfaces. Each line is parsed
//! into a [`ShellCommand`] and applied to a [`Session`]; the shell then prints
//! the refreshed page for the active surface.
//!
//! ```text
//! geopin> click 46.2 2.2
//! geopin> pick France
//! geopin> search fra
//! geopin> next
//! ```

pub mod error;

pub use error::ShellError;

use crate::camera::{FlyTo, MapSurface};
use crate::geo::Coordinate;
use crate::output;
use crate::session::{PickOutcome, Session};
use crate::view::{PageSize, Surface};
use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

const NO_POINTS_FOR_LIST: &str = "No points yet. Click the map or pick a country first.";

const HELP: &str = "\
Commands:
  click <lat> <lng>   Mark a point on the map
  pick [country]      Mark a catalog country and fly to it
  search [term]       Filter points by name (empty clears)
  page <n>            Jump to page n
  next | prev         Move one page
  size <n>            Points per page (3, 6, 9, 12)
  map | list          Switch surface
  show [n]            Detail card for point n (default: selected)
  clear               Close the selected point
  help                Show this help
  quit                Leave the shell";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Click(Coordinate),
    Pick(Option<String>),
    Search(String),
    Page(usize),
    Next,
    Prev,
    Size(usize),
    Surface(Surface),
    Show(Option<usize>),
    Clear,
    Help,
    Quit,
    /// Blank line, just redraw
    Refresh,
}

impl ShellCommand {
    /// Parse a line of user input
    ///
    /// Click coordinates are normalized: latitude is clamped and longitude
    /// wrapped, so only non-finite numbers are rejected.
    ///
    /// # Errors
    ///
    /// Returns `ShellError` for unknown commands, missing or malformed
    /// arguments.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word.to_lowercase().as_str() {
            "" => Ok(Self::Refresh),
            "click" | "c" => {
                let mut parts = rest.split([' ', ',']).filter(|s| !s.is_empty());
                let (Some(lat), Some(lng)) = (parts.next(), parts.next()) else {
                    return Err(ShellError::MissingArgument {
                        command: "click",
                        argument: "a latitude and a longitude",
                    });
                };
                let coordinate = Coordinate::normalized(parse_number(lat)?, parse_number(lng)?)?;
                Ok(Self::Click(coordinate))
            }
            "pick" | "p" => Ok(Self::Pick((!rest.is_empty()).then(|| rest.to_string()))),
            "search" | "/" => Ok(Self::Search(rest.to_string())),
            "page" => {
                if rest.is_empty() {
                    return Err(ShellError::MissingArgument {
                        command: "page",
                        argument: "a page number",
                    });
                }
                Ok(Self::Page(parse_count(rest)?))
            }
            "next" | "n" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            "size" => {
                if rest.is_empty() {
                    return Err(ShellError::MissingArgument {
                        command: "size",
                        argument: "a page size",
                    });
                }
                Ok(Self::Size(parse_count(rest)?))
            }
            "map" | "list" => Ok(Self::Surface(word.parse()?)),
            "show" => {
                if rest.is_empty() {
                    Ok(Self::Show(None))
                } else {
                    Ok(Self::Show(Some(parse_count(rest)?)))
                }
            }
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_number(value: &str) -> Result<f64, ShellError> {
    value
        .parse()
        .map_err(|_| ShellError::InvalidNumber(value.to_string()))
}

fn parse_count(value: &str) -> Result<usize, ShellError> {
    value
        .parse()
        .map_err(|_| ShellError::InvalidNumber(value.to_string()))
}

/// Map surface that reports camera moves on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalMap;

impl MapSurface for TerminalMap {
    fn fly_to(&mut self, command: FlyTo) {
        println!(
            "{} {} (zoom {})",
            "Flying to".cyan(),
            output::format_coordinate(&command.target),
            command.zoom
        );
    }
}

/// Whether the shell loop should keep going
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print this text and prompt again
    Continue(String),
    Quit,
}

/// Interactive shell state
pub struct Shell {
    session: Session,
    quiet: bool,
}

impl Shell {
    #[must_use]
    pub const fn new(session: Session, quiet: bool) -> Self {
        Self { session, quiet }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Apply one command to the session
    ///
    /// A bare `pick` is a no-op here; the interactive loop resolves it
    /// through a selector first.
    ///
    /// # Errors
    ///
    /// Returns `ShellError` when the command refers to something that does
    /// not exist (page size, point number).
    pub fn apply(
        &mut self,
        command: ShellCommand,
        map: &mut dyn MapSurface,
    ) -> Result<Flow, ShellError> {
        let notice = match command {
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Help => return Ok(Flow::Continue(HELP.to_string())),
            ShellCommand::Click(coordinate) => {
                let index = self.session.click(coordinate);
                self.point_notice(index)
            }
            ShellCommand::Pick(None) => None,
            ShellCommand::Pick(Some(name)) => match self.session.pick_country(&name, map) {
                PickOutcome::Added { index } => self.point_notice(index),
                PickOutcome::Unavailable => Some(
                    format!("'{name}' is not in the catalog or has no coordinates")
                        .yellow()
                        .to_string(),
                ),
            },
            ShellCommand::Search(term) => {
                self.session.set_search_term(term);
                None
            }
            ShellCommand::Page(n) => {
                self.session.set_page(n);
                None
            }
            ShellCommand::Next => {
                self.session.next_page();
                None
            }
            ShellCommand::Prev => {
                self.session.prev_page();
                None
            }
            ShellCommand::Size(n) => {
                let size = PageSize::try_from(n)?;
                self.session.set_page_size(size);
                None
            }
            ShellCommand::Surface(Surface::List) if !self.session.has_points() => {
                return Ok(Flow::Continue(NO_POINTS_FOR_LIST.to_string()));
            }
            ShellCommand::Surface(surface) => {
                self.session.set_surface(surface);
                None
            }
            ShellCommand::Show(number) => {
                let point = match number {
                    Some(n) => self
                        .session
                        .store()
                        .get(n.wrapping_sub(1))
                        .ok_or(ShellError::NoSuchPoint(n))?,
                    None => match self.session.selected_point() {
                        Some(point) => point,
                        None => return Ok(Flow::Continue("No point selected.".to_string())),
                    },
                };
                return Ok(Flow::Continue(output::point_card(point)));
            }
            ShellCommand::Clear => {
                self.session.clear_selection();
                None
            }
            ShellCommand::Refresh => None,
        };

        let page = self.render();
        Ok(Flow::Continue(match notice {
            Some(notice) if !self.quiet => format!("{notice}\n{page}"),
            _ => page,
        }))
    }

    fn point_notice(&self, index: usize) -> Option<String> {
        self.session
            .store()
            .get(index)
            .map(|point| format!("Added #{}: {}", index + 1, output::point_card(point)))
    }

    /// Current page for the active surface
    #[must_use]
    pub fn render(&self) -> String {
        let view = self.session.view();
        output::render_page(
            &view,
            self.session.view_state().surface(),
            self.session.selection().map(|s| s.index()),
            self.quiet,
        )
    }

    fn choose_country(&self) -> Result<Option<String>, ShellError> {
        let names: Vec<&str> = self
            .session
            .catalog()
            .selectable()
            .map(|c| c.common_name.as_str())
            .collect();
        if names.is_empty() {
            return Ok(None);
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Country")
            .items(&names)
            .interact_opt()
            .map_err(|e| ShellError::Input(e.to_string()))?;
        Ok(choice.and_then(|i| names.get(i)).map(ToString::to_string))
    }

    /// Run the read-apply-print loop until the user quits
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Input` if the terminal cannot be read.
    pub fn run(&mut self, map: &mut dyn MapSurface) -> Result<(), ShellError> {
        if !self.quiet {
            println!("{}", "Type 'help' for commands.".dimmed());
        }
        println!("{}", self.render());

        loop {
            let line: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("geopin")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| ShellError::Input(e.to_string()))?;

            let command = match ShellCommand::parse(&line) {
                Ok(ShellCommand::Pick(None)) => match self.choose_country()? {
                    Some(name) => ShellCommand::Pick(Some(name)),
                    None => continue,
                },
                Ok(command) => command,
                Err(e) => {
                    eprintln!("{} {e}", "Error:".red());
                    continue;
                }
            };

            match self.apply(command, map) {
                Ok(Flow::Continue(text)) => println!("{text}"),
                Ok(Flow::Quit) => return Ok(()),
                Err(e) => eprintln!("{} {e}", "Error:".red()),
            }
        }
    }
}

/// Execute the shell command
///
/// # Errors
///
/// Returns `ShellError::Input` if the terminal cannot be read.
pub fn execute(session: Session, quiet: bool) -> Result<(), ShellError> {
    let mut shell = Shell::new(session, quiet);
    shell.run(&mut TerminalMap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingMap, sample_catalog};

    fn shell() -> Shell {
        Shell::new(Session::default().with_catalog(sample_catalog()), true)
    }

    fn run(shell: &mut Shell, map: &mut RecordingMap, line: &str) -> Result<Flow, ShellError> {
        shell.apply(ShellCommand::parse(line)?, map)
    }

    #[test]
    fn test_parse_click() {
        let command = ShellCommand::parse("click 46.2276, 2.2137").unwrap();
        assert_eq!(
            command,
            ShellCommand::Click(Coordinate::new(46.2276, 2.2137).unwrap())
        );
    }

    #[test]
    fn test_parse_click_normalizes() {
        let command = ShellCommand::parse("click 95 190").unwrap();
        assert_eq!(
            command,
            ShellCommand::Click(Coordinate::new(90.0, -170.0).unwrap())
        );
    }

    #[test]
    fn test_parse_click_errors() {
        assert_eq!(
            ShellCommand::parse("click 10"),
            Err(ShellError::MissingArgument {
                command: "click",
                argument: "a latitude and a longitude",
            })
        );
        assert_eq!(
            ShellCommand::parse("click ten 10"),
            Err(ShellError::InvalidNumber("ten".to_string()))
        );
        assert!(matches!(
            ShellCommand::parse("click inf 0"),
            Err(ShellError::Geo(_))
        ));
    }

    #[test]
    fn test_parse_misc_commands() {
        assert_eq!(ShellCommand::parse("").unwrap(), ShellCommand::Refresh);
        assert_eq!(ShellCommand::parse("pick").unwrap(), ShellCommand::Pick(None));
        assert_eq!(
            ShellCommand::parse("pick United States").unwrap(),
            ShellCommand::Pick(Some("United States".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("search").unwrap(),
            ShellCommand::Search(String::new())
        );
        assert_eq!(ShellCommand::parse("page 3").unwrap(), ShellCommand::Page(3));
        assert_eq!(
            ShellCommand::parse("LIST").unwrap(),
            ShellCommand::Surface(Surface::List)
        );
        assert_eq!(ShellCommand::parse("show 2").unwrap(), ShellCommand::Show(Some(2)));
        assert_eq!(ShellCommand::parse("exit").unwrap(), ShellCommand::Quit);
        assert!(matches!(
            ShellCommand::parse("teleport"),
            Err(ShellError::UnknownCommand(_))
        ));
        assert!(matches!(
            ShellCommand::parse("page"),
            Err(ShellError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_click_then_render() {
        let mut shell = shell();
        let mut map = RecordingMap::default();

        let flow = run(&mut shell, &mut map, "click 46.25 2.25").unwrap();
        assert_eq!(flow, Flow::Continue("France".to_string()));
        assert!(map.commands.is_empty());
    }

    #[test]
    fn test_pick_flies_once() {
        let mut shell = shell();
        let mut map = RecordingMap::default();

        run(&mut shell, &mut map, "pick Armenia").unwrap();
        run(&mut shell, &mut map, "search arm").unwrap();
        run(&mut shell, &mut map, "").unwrap();

        assert_eq!(map.commands.len(), 1);
        assert_eq!(
            shell.session().selected_point().map(|p| p.display_name()),
            Some("Armenia")
        );
    }

    #[test]
    fn test_pick_unknown_country() {
        let mut shell = shell();
        let mut map = RecordingMap::default();

        run(&mut shell, &mut map, "pick Atlantis").unwrap();
        assert!(!shell.session().has_points());
        assert!(map.commands.is_empty());
    }

    #[test]
    fn test_size_rejects_unoffered_value() {
        let mut shell = shell();
        let mut map = RecordingMap::default();

        assert_eq!(
            run(&mut shell, &mut map, "size 5"),
            Err(ShellError::View(crate::view::ViewError::InvalidPageSize(5)))
        );
        assert!(run(&mut shell, &mut map, "size 3").is_ok());
        assert_eq!(shell.session().view_state().page_size().get(), 3);
    }

    #[test]
    fn test_show_point_and_missing_point() {
        let mut shell = shell();
        let mut map = RecordingMap::default();
        run(&mut shell, &mut map, "pick France").unwrap();

        let Flow::Continue(card) = run(&mut shell, &mut map, "show 1").unwrap() else {
            panic!("expected a card");
        };
        assert!(card.contains("Paris"));

        assert_eq!(
            run(&mut shell, &mut map, "show 9"),
            Err(ShellError::NoSuchPoint(9))
        );
        assert_eq!(
            run(&mut shell, &mut map, "show 0"),
            Err(ShellError::NoSuchPoint(0))
        );
    }

    #[test]
    fn test_show_without_selection() {
        let mut shell = shell();
        let mut map = RecordingMap::default();
        run(&mut shell, &mut map, "pick France").unwrap();
        run(&mut shell, &mut map, "clear").unwrap();

        assert_eq!(
            run(&mut shell, &mut map, "show").unwrap(),
            Flow::Continue("No point selected.".to_string())
        );
    }

    #[test]
    fn test_list_requires_points() {
        let mut shell = shell();
        let mut map = RecordingMap::default();

        assert_eq!(
            run(&mut shell, &mut map, "list").unwrap(),
            Flow::Continue(NO_POINTS_FOR_LIST.to_string())
        );
        assert_eq!(shell.session().view_state().surface(), Surface::Map);

        run(&mut shell, &mut map, "click 10 10").unwrap();
        run(&mut shell, &mut map, "list").unwrap();
        assert_eq!(shell.session().view_state().surface(), Surface::List);
    }

    #[test]
    fn test_quit() {
        let mut shell = shell();
        let mut map = RecordingMap::default();
        assert_eq!(run(&mut shell, &mut map, "quit").unwrap(), Flow::Quit);
    }
}
