use anyhow::anyhow;
use log::{debug, error, info};
use rouille::{router, Request, Response};
use serde::Serialize;

use crate::board::RelayBoard;
use crate::channel::{Brightness, ChannelId, ChannelRecord, PowerCommand};
use crate::error::InvalidRequest;

#[derive(Serialize, Debug, Clone)]
pub struct AboutResponse {
    pub version: String,
    pub instance_name: String,
}

#[derive(Serialize, Debug)]
struct ErrorResponse {
    error: &'static str,
}

pub struct ServerState {
    pub board: RelayBoard,
    pub about: AboutResponse,
}

impl ServerState {
    pub fn new(instance_name: &str) -> ServerState {
        let version: &str = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
        return ServerState {
            board: RelayBoard::new(),
            about: AboutResponse {
                version: version.to_string(),
                instance_name: instance_name.to_string(),
            },
        };
    }
}

fn set_power(board: &RelayBoard, id: &str, command: &str) -> Result<ChannelRecord, InvalidRequest> {
    let id: ChannelId = id.parse()?;
    let command: PowerCommand = command.parse()?;
    return Ok(board.set_power(id, command));
}

fn set_brightness(board: &RelayBoard, id: &str, value: &str) -> Result<ChannelRecord, InvalidRequest> {
    let id: ChannelId = id.parse()?;
    let brightness: Brightness = value.parse()?;
    return Ok(board.set_brightness(id, brightness));
}

fn respond(result: Result<ChannelRecord, InvalidRequest>) -> Response {
    match result {
        Ok(record) => Response::json(&record),
        Err(err) => {
            debug!("rejected request: {}", err);
            Response::json(&ErrorResponse { error: "invalid" }).with_status_code(400)
        }
    }
}

// Any origin may call us; browsers only need the extra headers for preflights.
fn with_cors(response: Response) -> Response {
    return response.with_additional_header("Access-Control-Allow-Origin", "*");
}

fn preflight() -> Response {
    return Response::empty_204()
        .with_additional_header("Access-Control-Allow-Methods", "GET, OPTIONS")
        .with_additional_header("Access-Control-Allow-Headers", "*");
}

/// Routes a single request. Doesn't do any I/O besides touching the board.
pub fn handle(request: &Request, state: &ServerState) -> Response {
    if request.method() == "OPTIONS" {
        return with_cors(preflight());
    }
    let board = &state.board;
    let response = router!(request,
        (GET) (/) => {
            Response::redirect_302("/status")
        },

        (GET) (/status) => {
            Response::json(&board.status())
        },

        (GET) (/about) => {
            Response::json(&state.about)
        },

        (GET) (/relay/{id: String}/brightness/{value: String}) => {
            respond(set_brightness(board, &id, &value))
        },

        (GET) (/relay/{id: String}/{command: String}) => {
            respond(set_power(board, &id, &command))
        },

        _ => Response::empty_404()
    );
    return with_cors(response);
}

/// Binds to `bind` and serves requests until the process is killed.
pub fn run(bind: &str, state: ServerState) -> anyhow::Result<()> {
    let server = rouille::Server::new(bind, move |request| {
        rouille::log_custom(
            request,
            |req, resp, elapsed| {
                info!("{} {} -> {} ({:?})", req.method(), req.raw_url(), resp.status_code, elapsed)
            },
            |req, elapsed| error!("{} {} panicked after {:?}", req.method(), req.raw_url(), elapsed),
            || handle(request, &state),
        )
    })
    .map_err(|err| anyhow!("could not bind to {}: {}", bind, err))?;
    info!("mock relay server on http://{}", server.server_addr());
    server.run();
    return Ok(());
}
