//! Integration tests for the stream actions against in-memory collaborators:
//! build -> wallet submit -> confirm -> terminal event.
//!
//! The mocks record what the client sends so each test can check both the
//! event and the transaction that produced it.

use std::cell::{Cell, RefCell};

use serde_json::json;
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use wasm_stream::instructions::ParsedInstruction;
use wasm_stream::*;

const SENDER: &str = "DgT9qyYwYKBRDyDw3EfR12LHQCQjtNrKu2qMsXHuosmB";
const RECEIVER: &str = "FKjSjCqByQRwSzZoMXA7bKnDbJe41YgJTHFFzBeC42bH";
const RENT: u64 = 1_559_040;

// =============================================================================
// Mocks
// =============================================================================

#[derive(Default)]
struct MockConnection {
    fail_rent: bool,
    fail_confirm: bool,
    confirmed: RefCell<Vec<Signature>>,
}

impl ChainConnection for MockConnection {
    async fn minimum_balance_for_rent_exemption(&self, space: u64) -> Result<u64, WasmStreamError> {
        assert_eq!(space, 96);
        if self.fail_rent {
            return Err(WasmStreamError::Rpc("rent unavailable".to_string()));
        }
        Ok(RENT)
    }

    async fn latest_blockhash(&self) -> Result<Hash, WasmStreamError> {
        Ok(Hash::new_from_array([3u8; 32]))
    }

    async fn confirm_transaction(&self, signature: &Signature) -> Result<(), WasmStreamError> {
        if self.fail_confirm {
            return Err(WasmStreamError::Rpc("custom program error: 0x1".to_string()));
        }
        self.confirmed.borrow_mut().push(*signature);
        Ok(())
    }
}

struct MockWallet {
    address: Pubkey,
    reject: bool,
    sent: RefCell<Vec<Transaction>>,
    counter: Cell<u8>,
}

impl MockWallet {
    fn new(address: &str) -> Self {
        MockWallet {
            address: Pubkey::from_base58(address).unwrap(),
            reject: false,
            sent: RefCell::new(Vec::new()),
            counter: Cell::new(0),
        }
    }

    fn rejecting(address: &str) -> Self {
        MockWallet {
            reject: true,
            ..MockWallet::new(address)
        }
    }

    fn last_sent_bytes(&self) -> Vec<u8> {
        self.sent.borrow().last().unwrap().to_bytes().unwrap()
    }
}

impl WalletSigner for MockWallet {
    fn public_key(&self) -> Result<Pubkey, WasmStreamError> {
        Ok(self.address)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, WasmStreamError> {
        if self.reject {
            return Err(WasmStreamError::Wallet("User rejected the request".to_string()));
        }
        self.sent.borrow_mut().push(transaction.clone());
        self.counter.set(self.counter.get() + 1);
        Ok(Signature::from([self.counter.get(); 64]))
    }
}

struct MockIndexer {
    status: u16,
}

impl StreamIndexer for MockIndexer {
    async fn get_streams(&self, wallet_address: &str) -> Result<serde_json::Value, WasmStreamError> {
        if self.status != 200 {
            return Err(WasmStreamError::Indexer(format!("HTTP {}", self.status)));
        }
        Ok(json!({
            "outgoing": [{ "sender": wallet_address, "receiver": RECEIVER }],
            "incoming": []
        }))
    }
}

fn client_with(connection: MockConnection, status: u16) -> StreamClient<MockConnection, MockIndexer> {
    let config = StreamConfig::default().resolve().unwrap();
    StreamClient::new(config, connection, MockIndexer { status })
}

fn client() -> StreamClient<MockConnection, MockIndexer> {
    client_with(MockConnection::default(), 200)
}

fn params(start_time: u64, end_time: u64, amount_speed: u64) -> CreateStreamParams {
    CreateStreamParams {
        receiver_address: RECEIVER.to_string(),
        start_time,
        end_time,
        amount_speed,
    }
}

// =============================================================================
// createStream
// =============================================================================

#[tokio::test]
async fn create_stream_funds_derived_account() {
    let client = client();
    let wallet = MockWallet::new(SENDER);

    let event = client
        .create_stream(&params(1_700_000_000, 1_700_000_100, 10), &wallet)
        .await;

    let StreamEvent::CreateResponse { result, id } = &event else {
        panic!("Expected CREATE_RESPONSE, got {:?}", event);
    };
    assert!(*result);
    assert_eq!(client.connection().confirmed.borrow().len(), 1);

    let program_id = client.config().program_id.to_string();
    let parsed = parse_transaction(&wallet.last_sent_bytes(), &program_id).unwrap();
    assert_eq!(parsed.fee_payer, SENDER);
    assert_eq!(parsed.recent_blockhash, Hash::new_from_array([3u8; 32]).to_string());

    match &parsed.instructions_data[0] {
        ParsedInstruction::CreateStreamAccount(p) => {
            assert_eq!(&p.stream_address, id);
            assert_eq!(p.base_address, SENDER);
            assert_eq!(p.lamports, 100 * 10 + 300_000 + RENT);
            assert_eq!(p.space, 96);
            assert!(p.seed.starts_with("abcdef"));
            assert!(p.seed.len() <= 32);

            let sender = Pubkey::from_base58(SENDER).unwrap();
            let derived =
                Pubkey::derive_with_seed(&sender, &p.seed, &client.config().program_id).unwrap();
            assert_eq!(&derived.to_string(), id);
        }
        other => panic!("Expected CreateStreamAccount, got {:?}", other),
    }

    match &parsed.instructions_data[1] {
        ParsedInstruction::CreateStream(p) => {
            assert_eq!(&p.stream_address, id);
            assert_eq!(p.receiver_address, RECEIVER);
            assert_eq!(p.amount_second, 10);
        }
        other => panic!("Expected CreateStream, got {:?}", other),
    }
}

#[tokio::test]
async fn create_stream_twice_uses_distinct_accounts() {
    let client = client();
    let wallet = MockWallet::new(SENDER);
    let p = params(1_000, 2_000, 1);

    let first = client.create_stream(&p, &wallet).await;
    let second = client.create_stream(&p, &wallet).await;

    match (first, second) {
        (StreamEvent::CreateResponse { id: a, .. }, StreamEvent::CreateResponse { id: b, .. }) => {
            assert_ne!(a, b)
        }
        other => panic!("Expected two CREATE_RESPONSE events, got {:?}", other),
    }
}

#[tokio::test]
async fn create_stream_wallet_rejection() {
    let client = client();
    let wallet = MockWallet::rejecting(SENDER);

    let event = client.create_stream(&params(1_000, 2_000, 1), &wallet).await;

    assert_eq!(event.kind(), "CREATE_FAILED");
    assert!(event.error().unwrap().contains("User rejected"));
    assert!(client.connection().confirmed.borrow().is_empty());
}

#[tokio::test]
async fn create_stream_confirmation_failure() {
    let client = client_with(
        MockConnection {
            fail_confirm: true,
            ..Default::default()
        },
        200,
    );
    let wallet = MockWallet::new(SENDER);

    let event = client.create_stream(&params(1_000, 2_000, 1), &wallet).await;

    // submitted, but never reported as created
    assert_eq!(wallet.sent.borrow().len(), 1);
    assert_eq!(event.kind(), "CREATE_FAILED");
    assert!(!event.is_success());
}

#[tokio::test]
async fn create_stream_rent_query_failure_sends_nothing() {
    let client = client_with(
        MockConnection {
            fail_rent: true,
            ..Default::default()
        },
        200,
    );
    let wallet = MockWallet::new(SENDER);

    let event = client.create_stream(&params(1_000, 2_000, 1), &wallet).await;

    assert_eq!(event.kind(), "CREATE_FAILED");
    assert!(wallet.sent.borrow().is_empty());
}

#[tokio::test]
async fn create_stream_inverted_window_sends_nothing() {
    let client = client();
    let wallet = MockWallet::new(SENDER);

    let event = client.create_stream(&params(2_000, 1_000, 1), &wallet).await;

    assert_eq!(event.kind(), "CREATE_FAILED");
    assert!(wallet.sent.borrow().is_empty());
}

#[tokio::test]
async fn create_stream_invalid_receiver() {
    let client = client();
    let wallet = MockWallet::new(SENDER);
    let mut p = params(1_000, 2_000, 1);
    p.receiver_address = "not-an-address".to_string();

    let event = client.create_stream(&p, &wallet).await;

    assert_eq!(event.kind(), "CREATE_FAILED");
    assert!(event.error().unwrap().contains("receiverAddress"));
}

// =============================================================================
// withdraw / cancelStream
// =============================================================================

#[tokio::test]
async fn withdraw_success() {
    let client = client();
    let wallet = MockWallet::new(RECEIVER);
    let stream = Pubkey::new_from_array([5u8; 32]).to_string();

    let event = client.withdraw(&stream, 12_345, &wallet).await;
    assert_eq!(event, StreamEvent::WithdrawSuccess { result: true });

    let program_id = client.config().program_id.to_string();
    let parsed = parse_transaction(&wallet.last_sent_bytes(), &program_id).unwrap();
    assert_eq!(parsed.fee_payer, RECEIVER);
    assert_eq!(parsed.instructions_data.len(), 1);
    match &parsed.instructions_data[0] {
        ParsedInstruction::Withdraw(p) => {
            assert_eq!(p.stream_address, stream);
            assert_eq!(p.receiver_address, RECEIVER);
            assert_eq!(p.amount, 12_345);
        }
        other => panic!("Expected Withdraw, got {:?}", other),
    }
}

#[tokio::test]
async fn withdraw_invalid_stream_id_sends_nothing() {
    let client = client();
    let wallet = MockWallet::new(RECEIVER);

    let event = client.withdraw("0OIl", 1, &wallet).await;

    assert_eq!(event.kind(), "WITHDRAW_FAILED");
    assert!(event.error().unwrap().contains("streamId"));
    assert!(wallet.sent.borrow().is_empty());
}

#[tokio::test]
async fn withdraw_wallet_rejection() {
    let client = client();
    let wallet = MockWallet::rejecting(RECEIVER);
    let stream = Pubkey::new_from_array([5u8; 32]).to_string();

    let event = client.withdraw(&stream, 1, &wallet).await;
    assert_eq!(event.kind(), "WITHDRAW_FAILED");
}

#[tokio::test]
async fn withdraw_confirmation_failure() {
    let client = client_with(
        MockConnection {
            fail_confirm: true,
            ..Default::default()
        },
        200,
    );
    let wallet = MockWallet::new(RECEIVER);
    let stream = Pubkey::new_from_array([5u8; 32]).to_string();

    let event = client.withdraw(&stream, 1, &wallet).await;

    assert_eq!(wallet.sent.borrow().len(), 1);
    assert_eq!(event.kind(), "WITHDRAW_FAILED");
    assert!(!event.is_success());
    assert!(event.error().unwrap().contains("0x1"));
}

#[tokio::test]
async fn cancel_success() {
    let client = client();
    let wallet = MockWallet::new(SENDER);
    let stream = Pubkey::new_from_array([6u8; 32]).to_string();

    let event = client.cancel_stream(&stream, RECEIVER, &wallet).await;
    assert_eq!(event, StreamEvent::CancelSuccess { result: true });

    let program_id = client.config().program_id.to_string();
    let parsed = parse_transaction(&wallet.last_sent_bytes(), &program_id).unwrap();
    match &parsed.instructions_data[0] {
        ParsedInstruction::Cancel(p) => {
            assert_eq!(p.stream_address, stream);
            assert_eq!(p.sender_address, SENDER);
            assert_eq!(p.receiver_address, RECEIVER);
        }
        other => panic!("Expected Cancel, got {:?}", other),
    }
}

#[tokio::test]
async fn cancel_confirmation_failure() {
    let client = client_with(
        MockConnection {
            fail_confirm: true,
            ..Default::default()
        },
        200,
    );
    let wallet = MockWallet::new(SENDER);
    let stream = Pubkey::new_from_array([6u8; 32]).to_string();

    let event = client.cancel_stream(&stream, RECEIVER, &wallet).await;

    assert_eq!(event.kind(), "CANCEL_FAILED");
    assert!(event.error().unwrap().contains("0x1"));
}

#[tokio::test]
async fn cancel_wallet_rejection() {
    let client = client();
    let wallet = MockWallet::rejecting(SENDER);
    let stream = Pubkey::new_from_array([6u8; 32]).to_string();

    let event = client.cancel_stream(&stream, RECEIVER, &wallet).await;

    assert_eq!(event.kind(), "CANCEL_FAILED");
    assert!(client.connection().confirmed.borrow().is_empty());
}

// =============================================================================
// getAllStreams
// =============================================================================

#[tokio::test]
async fn get_all_streams_passes_body_through() {
    let client = client();

    let event = client.get_all_streams(SENDER).await;

    match event {
        StreamEvent::DataReceived { result } => {
            assert_eq!(result["outgoing"][0]["sender"], SENDER);
        }
        other => panic!("Expected DATA_RECEIVED, got {:?}", other),
    }
}

#[tokio::test]
async fn get_all_streams_not_found() {
    let client = client_with(MockConnection::default(), 404);

    let event = client.get_all_streams(SENDER).await;

    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({
            "type": "DATA_NOT_RECEIVED",
            "result": { "data": null },
            "error": "Indexer error: HTTP 404"
        })
    );
}
