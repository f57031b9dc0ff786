use crate::protocol::{event_message, format_error, parse_command, render_update, ClientCommand};
use geoedit_core::Editor;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, warn};

/// Apply one command to the shared editor and collect the replies.
///
/// Input takes the write lock; frame requests only read, so a frame is always
/// built from a consistent scene.
pub fn apply_command(editor: &RwLock<Editor>, command: ClientCommand) -> Vec<String> {
    match command {
        ClientCommand::Frame => {
            let editor = editor.read().unwrap_or_else(PoisonError::into_inner);
            vec![render_update(&editor.frame())]
        }
        ClientCommand::Input(event) => {
            let mut editor = editor.write().unwrap_or_else(PoisonError::into_inner);
            editor.handle(event);

            let mut replies: Vec<String> = editor.drain_events().iter().map(event_message).collect();
            if editor.take_dirty() {
                let frame = editor.frame();
                debug!(draws = frame.draws.len(), "Scene changed, sending frame");
                replies.push(render_update(&frame));
            }
            replies
        }
    }
}

pub fn handle_text(editor: &RwLock<Editor>, text: &str) -> Vec<String> {
    match parse_command(text) {
        Ok(command) => apply_command(editor, command),
        Err(e) => {
            warn!("Rejected command {:?}: {}", text, e);
            vec![format_error(e.code(), &e.to_string(), "warning")]
        }
    }
}
