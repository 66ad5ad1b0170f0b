use std::io::{stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand, QueueableCommand};

/// Rewrites a single status line in place instead of scrolling the console.
pub struct ConsoleLogger {
    stdout: std::io::Stdout,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        let mut stdout = stdout();
        stdout.execute(cursor::Hide).unwrap();
        stdout.queue(cursor::SavePosition).unwrap();
        Self { stdout }
    }

    pub fn fps(&mut self, fps: f32) {
        self.status(&format!("FPS: {fps:.2}"));
    }

    pub fn status(&mut self, line: &str) {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::FromCursorDown))
            .unwrap();
        self.stdout.write_all(line.as_bytes()).unwrap();
        self.stdout.queue(cursor::RestorePosition).unwrap();
        self.stdout.flush().unwrap();
    }

    // Restores the cursor; call before the process exits.
    pub fn cleanup(&mut self) {
        self.stdout.execute(cursor::Show).unwrap();
    }
}
