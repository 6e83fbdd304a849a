//! Every command the wire contract defines survives `decode(encode(..))`
//! unchanged, through the public codec API.

use tilewire_protocol::{
    ActionKind, ActionRequest, ClientCommand, Codec, GameUpdate, JsonCodec,
    SeatIndex, ServerCommand, Snapshot, Tile, UpdateEvent,
};

fn seat(i: u8) -> SeatIndex {
    SeatIndex::new(i).expect("seat in range")
}

fn tiles(faces: &[&str]) -> Vec<Tile> {
    faces.iter().copied().map(Tile::from).collect()
}

fn client_commands() -> Vec<ClientCommand> {
    vec![
        ClientCommand::Login {
            nickname: "Alice".into(),
        },
        ClientCommand::PlayCard { tile: "5p".into() },
        ClientCommand::Action {
            kind: ActionKind::from("PONG"),
        },
        ClientCommand::Action {
            kind: ActionKind::skip(),
        },
    ]
}

fn server_commands() -> Vec<ServerCommand> {
    let snapshot = Snapshot {
        my_index: seat(1),
        turn_index: seat(3),
        sea: tiles(&["1m", "2m", "West"]),
        my_hand: tiles(&["1p", "1p", "4s"]),
        hand_counts: [13, 3, 10, 13],
        all_melds: [
            vec![],
            tiles(&["7s", "7s", "7s"]),
            tiles(&["Red", "Red", "Red", "Red"]),
            vec![],
        ],
        nicknames: Some(["A".into(), "B".into(), "C".into(), "D".into()]),
    };

    vec![
        ServerCommand::LoginSuccess,
        ServerCommand::GameStart,
        ServerCommand::GameUpdate(GameUpdate::notice("[Server] 4 Players Ready!")),
        ServerCommand::GameUpdate(GameUpdate::state(snapshot.clone())),
        ServerCommand::GameUpdate(GameUpdate {
            message: Some("state with message".into()),
            event: UpdateEvent::StateUpdate(Snapshot {
                nicknames: None,
                ..snapshot
            }),
        }),
        ServerCommand::GameUpdate(GameUpdate {
            message: None,
            event: UpdateEvent::Draw("9p".into()),
        }),
        ServerCommand::ActionRequest(ActionRequest::new([
            ActionKind::from("PONG"),
            ActionKind::from("KONG"),
        ])),
        ServerCommand::ActionRequest(ActionRequest {
            choices: vec![ActionKind::from("HU")],
            tile: Some("3m".into()),
        }),
        ServerCommand::GameOver {
            message: Some("Game Over - Wall Empty!".into()),
        },
        ServerCommand::Error { message: None },
    ]
}

#[test]
fn test_client_commands_round_trip() {
    let codec = JsonCodec;
    for cmd in client_commands() {
        let frame = codec.encode(&cmd).expect("encode");
        let back: ClientCommand = codec.decode(&frame).expect("decode");
        assert_eq!(back, cmd, "frame: {frame}");
    }
}

#[test]
fn test_server_commands_round_trip() {
    let codec = JsonCodec;
    for cmd in server_commands() {
        let frame = codec.encode(&cmd).expect("encode");
        let back: ServerCommand = codec.decode(&frame).expect("decode");
        assert_eq!(back, cmd, "frame: {frame}");
    }
}

#[test]
fn test_directions_do_not_cross() {
    let codec = JsonCodec;
    for cmd in client_commands() {
        let frame = codec.encode(&cmd).unwrap();
        assert!(codec.decode::<ServerCommand>(&frame).is_err(), "{frame}");
    }
    for cmd in server_commands() {
        let frame = codec.encode(&cmd).unwrap();
        assert!(codec.decode::<ClientCommand>(&frame).is_err(), "{frame}");
    }
}
