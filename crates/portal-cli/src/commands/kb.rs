use portal_knowledge::{FactGroup, KnowledgeEntry, KnowledgeStore};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::KbCommands;
use crate::cli::subcommands::kb::{KbLookupArgs, KbMentionsArgs, KbTopicsArgs};
use crate::output::output;

#[derive(Serialize)]
struct KeysResponse {
    count: usize,
    keys: Vec<&'static str>,
}

#[derive(Serialize)]
struct MentionsResponse<'a> {
    text: &'a str,
    entries: Vec<&'a KnowledgeEntry>,
}

/// Handle `portal kb <subcommand>`.
pub fn handle(action: &KbCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = KnowledgeStore::builtin();
    match action {
        KbCommands::Lookup(args) => lookup(store, args, flags),
        KbCommands::Keys => {
            let keys = store.keys().collect::<Vec<_>>();
            output(
                &KeysResponse {
                    count: keys.len(),
                    keys,
                },
                flags.format,
            )
        }
        KbCommands::Scenarios => output(&store.all_scenarios(), flags.format),
        KbCommands::Topics(args) => topics(store, args, flags),
        KbCommands::Mentions(args) => mentions(store, args, flags),
    }
}

fn lookup(store: &KnowledgeStore, args: &KbLookupArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(entry) = store.lookup(&args.key) else {
        anyhow::bail!(
            "no vocabulary entry for '{}' (keys are lowercase; see `portal kb keys`)",
            args.key
        );
    };
    output(entry, flags.format)
}

fn topics(store: &KnowledgeStore, args: &KbTopicsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let groups: Vec<&FactGroup> = match args.subject {
        Some(subject) => store.topic(subject).collect(),
        None => store.topics().iter().collect(),
    };
    output(&groups, flags.format)
}

fn mentions(
    store: &KnowledgeStore,
    args: &KbMentionsArgs,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(
        &MentionsResponse {
            text: &args.text,
            entries: store.mentions(&args.text),
        },
        flags.format,
    )
}
