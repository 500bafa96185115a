use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::MAX_QUEUED_TURNS;
use crate::snake::Heading::{self, *};

/// Arrow keys or WASD, either case.
pub fn heading_for_key(ev: &KeyEvent) -> Option<Heading> {
    match ev.code {
        KeyCode::Up => Some(Up),
        KeyCode::Down => Some(Down),
        KeyCode::Left => Some(Left),
        KeyCode::Right => Some(Right),
        KeyCode::Char(c) if !ev.modifiers.contains(KeyModifiers::CONTROL) => match c.to_ascii_lowercase() {
            'w' => Some(Up),
            'a' => Some(Left),
            's' => Some(Down),
            'd' => Some(Right),
            _ => None,
        },
        _ => None,
    }
}

pub fn is_quit(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

/// Direction keys waiting to be used, one per tick, oldest first.
#[derive(Clone, Debug, Default)]
pub struct TurnQueue {
    pending: VecDeque<Heading>,
}

impl TurnQueue {
    pub fn new() -> Self {
        TurnQueue::default()
    }

    /// Queues the direction keys among `events`. Returns true if one of them
    /// asks to quit. A key repeating the previous queued one is dropped, and
    /// once MAX_QUEUED_TURNS are waiting further keys are too.
    pub fn push_events<'a, I>(&mut self, events: I) -> bool
    where
        I: IntoIterator<Item = &'a KeyEvent>,
    {
        let mut quit = false;

        for ev in events {
            if is_quit(ev) {
                quit = true;
            } else if let Some(heading) = heading_for_key(ev) {
                self.push(heading);
            }
        }

        quit
    }

    pub fn push(&mut self, heading: Heading) {
        if self.pending.len() < MAX_QUEUED_TURNS && self.pending.back() != Some(&heading) {
            self.pending.push_back(heading);
        }
    }

    /// The heading for this tick, if any key is waiting.
    pub fn next_turn(&mut self) -> Option<Heading> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
