use async_trait::async_trait;
use dispatch_command::command::{Command, CommandData};
use dispatch_command::context::RunContext;
use dispatch_command::error::CommandResult;
use dispatch_command::guard::{is_command, missing_properties};
use dispatch_command::interaction::{CommandInteraction, Interaction};
use dispatch_command::manifest::CommandManifest;
use dispatch_command::message_filter::{Message, MessageFilter, MessageFilterRegistrar};
use dispatch_command::permission::{Permission, PermissionHandler};
use dispatch_command::snowflake::Snowflake;
use dispatch_command::ui::{ActionRow, Ui, UiRegistrar};
use serde_json::{Value, json};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 插件作者编写的类型化命令
struct Ping {
    data: CommandData,
    allowed_users: Vec<Snowflake>,
    handler: Box<dyn PermissionHandler>,
}

impl Ping {
    fn new() -> Self {
        Self {
            data: CommandData::builder()
                .name("ping")
                .description("Replies with pong")
                .build(),
            allowed_users: vec![Snowflake::new(42)],
            handler: Box::new(|i: &CommandInteraction| {
                if i.guild_id.is_some() {
                    Permission::Allowed
                } else {
                    Permission::denied("ping only works in servers")
                }
            }),
        }
    }
}

#[async_trait]
impl Command for Ping {
    fn data(&self) -> &CommandData {
        &self.data
    }

    async fn run(&self, ctx: RunContext<'_>) -> CommandResult<()> {
        let rows = ctx.register_ui(Ui::new(json!({ "type": "text", "content": "pong" })));
        info!(rows = rows.len(), user = %ctx.interaction().user_id(), "ping answered");

        ctx.register_message_filters(vec![MessageFilter::new(|m: &Message| {
            !m.content.eq_ignore_ascii_case("ping")
        })]);
        Ok(())
    }

    fn allowed_users(&self) -> Option<&[Snowflake]> {
        Some(self.allowed_users.as_slice())
    }

    fn permission_handler(&self) -> Option<&dyn PermissionHandler> {
        Some(&*self.handler)
    }
}

/// 控制台版宿主能力：只打印，不渲染
struct ConsoleHost;

impl UiRegistrar for ConsoleHost {
    fn register_ui(&self, ui: Ui) -> Vec<ActionRow> {
        info!(tree = %ui.tree(), "ui registered");
        vec![ActionRow {
            components: vec![ui.0],
        }]
    }
}

impl MessageFilterRegistrar for ConsoleHost {
    fn register_message_filters(&self, filters: Vec<MessageFilter>) {
        info!(count = filters.len(), "message filters registered");
    }
}

fn sample_candidates() -> Value {
    json!([
        { "name": "ping", "run": "handlers::ping", "description": "Replies with pong" },
        { "name": "purge", "run": "moderation::purge", "allowedRoles": ["123"] },
        { "name": "broken" },
        "ping",
        null,
        { "name": 7, "run": "handlers::seven" }
    ])
}

fn load_candidates() -> anyhow::Result<Value> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(sample_candidates()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. 筛选动态加载的候选插件
    let candidates = load_candidates()?;
    let candidates = match candidates {
        Value::Array(items) => items,
        single => vec![single],
    };

    for (index, candidate) in candidates.iter().enumerate() {
        if !is_command(candidate) {
            warn!(index, missing = ?missing_properties(candidate), "skipping candidate");
            continue;
        }
        match CommandManifest::from_value(candidate) {
            Ok(manifest) => info!(index, name = manifest.name(), run = %manifest.run, "accepted"),
            Err(err) => warn!(index, %err, "shape ok but metadata invalid"),
        }
    }

    // 2. 类型化命令：宿主自行裁决权限后调用 run
    let ping = Ping::new();
    let slash = CommandInteraction::builder()
        .id(Snowflake::new(1))
        .command_name(ping.name())
        .user_id(Snowflake::new(42))
        .channel_id(Snowflake::new(3))
        .guild_id(Snowflake::new(9))
        .build();

    if let Some(handler) = ping.permission_handler() {
        let verdict = handler.check(&slash).await;
        info!(?verdict, allowed_users = ?ping.allowed_users(), "permission handler");
        if let Some(reason) = verdict.denial_reason() {
            warn!(reason, "host refused to run ping");
            return Ok(());
        }
    }

    let interaction = Interaction::from(slash);
    ping.run(RunContext::new(&interaction, &ConsoleHost, &ConsoleHost))
        .await?;

    Ok(())
}
