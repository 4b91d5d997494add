use crate::cli::commands::Session;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(session: &Session) -> AppResult<()> {
    LogLogic::print_log(session.state.conn())
}
