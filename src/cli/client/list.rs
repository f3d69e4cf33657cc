use clap::Args;
use consign::tables::clients_table;

use crate::cli::{Session, search::ClientSearchArgs};

#[derive(Debug, Args)]
pub(crate) struct ListClientsArgs {
    #[command(flatten)]
    search: ClientSearchArgs,
}

pub(crate) fn run(args: &ListClientsArgs, session: &Session) {
    let clients = session
        .ledger
        .search_clients(&args.search.search, &args.search.filters);

    if clients.is_empty() {
        println!("no clients found");
        return;
    }

    println!("{}", clients_table(&clients, session.currency));
}
