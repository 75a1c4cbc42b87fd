use crate::db::db::Db;
use crate::libs::task_board::TaskBoard;
use crate::libs::terminal::TerminalView;
use anyhow::Result;

pub fn cmd(db: &Db) -> Result<()> {
    let mut board = TaskBoard::new(db, TerminalView::new())?;
    board.run()
}
