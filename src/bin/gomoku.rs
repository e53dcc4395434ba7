use anyhow::anyhow;

use gomoku::framework::run_windowed;
use gomoku::gomoku::GomokuSession;
use gomoku::util::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();
    log::info!("Welcome to Gomoku! Left-click any point on the board to place a stone; Black moves first.");

    run_windowed(GomokuSession::create_loop()).map_err(|e| anyhow!("failed to open the game window: {e}"))
}
