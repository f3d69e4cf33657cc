use clap::Args;
use consign::{
    money::format_money,
    tables::{clients_table, total_balance},
};

use super::{Session, search::ClientSearchArgs};

#[derive(Debug, Args)]
pub(crate) struct BalanceArgs {
    #[command(flatten)]
    pub(crate) search: ClientSearchArgs,

    /// Include clients whose balance is zero
    #[arg(long)]
    pub(crate) all: bool,
}

pub(crate) fn run(args: &BalanceArgs, session: &Session) {
    let clients = session
        .ledger
        .balance_view(&args.search.search, &args.search.filters, args.all);

    if clients.is_empty() {
        println!("no clients with a balance");
        return;
    }

    println!("{}", clients_table(&clients, session.currency));
    println!(
        "total balance: {}",
        format_money(total_balance(&clients), session.currency)
    );
}
