//! # Console Commands
//!
//! One console line is one operator action on the running session.
//!
//! ```text
//! view <sales|orders|reports|settings|ai-dashboard>
//! modal <kind> <open|close>       edit [category]     done
//! zoom <in|out>                   resize <px>
//! select <name>   pin <name>      add                 delete <name>
//! search [query]                  focus               key <up|down|left|right|enter|esc>
//! theme [id]      outside         admin               login
//! cart <count>    refresh         nav   rows   show   help   quit
//! ```

use pos_view_core::{ModalKind, NavKey, Theme, ViewState};
use pos_view_state::{
    HeadlessWindow, HostWindow, MemoryStore, PosStore, RowEvent, Session, StoreAction,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Why a console line could not be turned into a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    View(ViewState),
    Modal(ModalKind, bool),
    Edit(Option<String>),
    Done,
    Zoom(bool),
    Resize(u32),
    Select(String),
    Pin(String),
    Add,
    Delete(String),
    Search(Option<String>),
    Focus,
    Key(NavKey),
    Theme(Option<Theme>),
    Outside,
    Admin,
    Login,
    Cart(u32),
    Refresh,
    Nav,
    Rows,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
view <name>        switch view (ai-dashboard needs admin)
modal <kind> <open|close>
edit [category]    open the menu item editor (admin)
done               close the menu item editor
zoom <in|out>      change the base font size
resize <px>        resize the window
select <name>      make a category active
pin <name>         pin or unpin a category (admin)
add                add a category (admin)
delete <name>      delete a category (admin)
search [query]     set or clear the search query
focus              focus the category column
key <k>            up, down, left, right, enter, esc
theme [id]         toggle the theme dropdown, or pick a theme
outside            press the pointer outside the theme selector
admin              leave admin mode, or ask for login
login              simulate a successful admin login
cart <count>       set the cart item count
refresh            reload menu data
nav | rows | show  print the header, category rows or full state
quit";

fn parse_key(raw: &str) -> Result<NavKey, CommandError> {
    match raw.to_lowercase().as_str() {
        "up" => Ok(NavKey::Up),
        "down" => Ok(NavKey::Down),
        "left" => Ok(NavKey::Left),
        "right" => Ok(NavKey::Right),
        "enter" => Ok(NavKey::Enter),
        "esc" | "escape" => Ok(NavKey::Escape),
        other => Err(CommandError::InvalidArgument {
            what: "key",
            value: other.to_string(),
        }),
    }
}

fn parse_number(what: &'static str, raw: &str) -> Result<u32, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidArgument {
        what,
        value: raw.to_string(),
    })
}

fn invalid(what: &'static str, raw: &str) -> CommandError {
    CommandError::InvalidArgument {
        what,
        value: raw.to_string(),
    }
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = |what| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(what))
            } else {
                Ok(rest)
            }
        };
        let optional = (!rest.is_empty()).then(|| rest.to_string());

        match word.to_lowercase().as_str() {
            "view" => {
                let raw = arg("view")?;
                raw.parse().map(Command::View).map_err(|_| invalid("view", raw))
            }
            "modal" => {
                let raw = arg("modal")?;
                let (kind, state) = raw
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::MissingArgument("open|close"))?;
                let kind: ModalKind = kind.parse().map_err(|_| invalid("modal", kind))?;
                match state.trim() {
                    "open" => Ok(Command::Modal(kind, true)),
                    "close" => Ok(Command::Modal(kind, false)),
                    other => Err(invalid("modal state", other)),
                }
            }
            "edit" => Ok(Command::Edit(optional)),
            "done" => Ok(Command::Done),
            "zoom" => match arg("in|out")? {
                "in" | "+" => Ok(Command::Zoom(true)),
                "out" | "-" => Ok(Command::Zoom(false)),
                other => Err(invalid("zoom direction", other)),
            },
            "resize" => Ok(Command::Resize(parse_number("width", arg("width")?)?)),
            "select" => Ok(Command::Select(arg("category")?.to_string())),
            "pin" => Ok(Command::Pin(arg("category")?.to_string())),
            "add" => Ok(Command::Add),
            "delete" => Ok(Command::Delete(arg("category")?.to_string())),
            "search" => Ok(Command::Search(optional)),
            "focus" => Ok(Command::Focus),
            "key" => Ok(Command::Key(parse_key(arg("key")?)?)),
            "theme" => match optional {
                None => Ok(Command::Theme(None)),
                Some(raw) => raw
                    .parse()
                    .map(|t| Command::Theme(Some(t)))
                    .map_err(|_| invalid("theme", &raw)),
            },
            "outside" => Ok(Command::Outside),
            "admin" => Ok(Command::Admin),
            "login" => Ok(Command::Login),
            "cart" => Ok(Command::Cart(parse_number("count", arg("count")?)?)),
            "refresh" => Ok(Command::Refresh),
            "nav" => Ok(Command::Nav),
            "rows" => Ok(Command::Rows),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Runs one command and returns what to print.
pub async fn execute(
    command: Command,
    session: &Session,
    store: &MemoryStore,
    host: &HeadlessWindow,
) -> Value {
    let manager = &session.manager;
    match command {
        Command::View(view) => json!({ "switched": session.top_nav.switch_view(view) }),
        Command::Modal(kind, open) => {
            manager.set_modal_open(kind, open);
            json!(manager.modals())
        }
        Command::Edit(category) => {
            json!(manager.open_menu_item_editor(None, category.as_deref()))
        }
        Command::Done => {
            manager.close_menu_item_editor();
            json!(manager.editing_target())
        }
        Command::Zoom(larger) => {
            let applied = if larger {
                manager.zoom_in()
            } else {
                manager.zoom_out()
            };
            json!({ "applied": applied, "fontSize": host.root_font_size() })
        }
        Command::Resize(width) => {
            host.set_width(width);
            session.handle_resize(width);
            json!(manager.panels())
        }
        Command::Select(name) => {
            session.categories.select_category(&name);
            json!({ "active": name })
        }
        Command::Pin(name) => {
            let mut event = RowEvent::new();
            json!(session.categories.toggle_pin(&name, &mut event))
        }
        Command::Add => json!(session.categories.add_category().await),
        Command::Delete(name) => json!(session.categories.delete_category(&name).await),
        Command::Search(query) => {
            match query {
                Some(q) => manager.set_search_query(q),
                None => manager.clear_search(),
            }
            json!({ "searchQuery": manager.search_query() })
        }
        Command::Focus => {
            session.categories.handle_focus();
            json!(manager.focus())
        }
        Command::Key(key) => {
            // The console has no menu grid.
            session.categories.handle_nav_key(key, 0);
            json!(manager.focus())
        }
        Command::Theme(None) => {
            json!({ "dropdownOpen": session.top_nav.toggle_theme_dropdown() })
        }
        Command::Theme(Some(theme)) => {
            session.top_nav.select_theme(theme);
            json!({ "theme": theme })
        }
        Command::Outside => json!({ "closed": session.handle_pointer_down(false) }),
        Command::Admin => json!(session.top_nav.toggle_admin()),
        Command::Login => {
            if !store.is_admin_mode() {
                store.dispatch(StoreAction::ToggleAdminMode {
                    reason: "Console login".to_string(),
                });
            }
            manager.set_modal_open(ModalKind::AdminLogin, false);
            json!({ "admin": true })
        }
        Command::Cart(count) => {
            store.update(|d| d.total_items = count);
            json!({ "badge": session.top_nav.cart_badge() })
        }
        Command::Refresh => {
            session.top_nav.refresh_menu();
            json!({ "refreshing": true })
        }
        Command::Nav => json!(session.top_nav.model()),
        Command::Rows => json!(session.categories.rows()),
        Command::Show => json!(manager.snapshot()),
        Command::Help => Value::String(HELP.to_string()),
        Command::Quit => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "view ai-dashboard".parse::<Command>(),
            Ok(Command::View(ViewState::AiDashboard))
        );
        assert_eq!("zoom +".parse::<Command>(), Ok(Command::Zoom(true)));
        assert_eq!(
            "modal paid-in-out open".parse::<Command>(),
            Ok(Command::Modal(ModalKind::PaidInOut, true))
        );
        assert_eq!(
            "delete  Hot Drinks ".parse::<Command>(),
            Ok(Command::Delete("Hot Drinks".into()))
        );
        assert_eq!("search".parse::<Command>(), Ok(Command::Search(None)));
        assert_eq!(
            "theme high_contrast".parse::<Command>(),
            Ok(Command::Theme(Some(Theme::HighContrast)))
        );
        assert_eq!("key esc".parse::<Command>(), Ok(Command::Key(NavKey::Escape)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "resize".parse::<Command>(),
            Err(CommandError::MissingArgument("width"))
        );
        assert!(matches!(
            "resize wide".parse::<Command>(),
            Err(CommandError::InvalidArgument { what: "width", .. })
        ));
        assert!(matches!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown(_))
        ));
    }
}
