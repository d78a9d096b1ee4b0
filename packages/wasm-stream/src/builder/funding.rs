//! Lamports needed to open a stream account.

use crate::error::WasmStreamError;
use crate::state::StreamState;

/// Size of the on-chain stream record. Must match the program's allocation.
pub const STREAM_ACCOUNT_SPACE: u64 = StreamState::LEN as u64;

/// Flat amount on top of the streamed total that covers the admin fee cut.
pub const ADMIN_FEE_MARGIN: u64 = 300_000;

/// Total the stream pays out over its full duration.
pub fn streamed_total(start_time: u64, end_time: u64, amount_second: u64) -> Result<u64, WasmStreamError> {
    let duration = end_time.checked_sub(start_time).ok_or_else(|| {
        WasmStreamError::InvalidInput(format!(
            "end_time ({}) is before start_time ({})",
            end_time, start_time
        ))
    })?;

    duration
        .checked_mul(amount_second)
        .ok_or_else(|| WasmStreamError::invalid_input("Streamed total overflows u64"))
}

/// `(end - start) * amount_second + ADMIN_FEE_MARGIN + rent`
pub fn stream_funding_lamports(
    start_time: u64,
    end_time: u64,
    amount_second: u64,
    rent_exempt_minimum: u64,
) -> Result<u64, WasmStreamError> {
    streamed_total(start_time, end_time, amount_second)?
        .checked_add(ADMIN_FEE_MARGIN)
        .and_then(|v| v.checked_add(rent_exempt_minimum))
        .ok_or_else(|| WasmStreamError::invalid_input("Stream funding overflows u64"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_account_space_is_96() {
        assert_eq!(STREAM_ACCOUNT_SPACE, 96);
    }

    #[rstest]
    #[case(0, 100, 10, 0, 301_000)]
    #[case(0, 100, 10, 1_559_040, 1_860_040)]
    #[case(50, 50, 10, 0, 300_000)]
    #[case(1_700_000_000, 1_700_000_060, 1_000, 890_880, 1_250_880)]
    fn test_funding(
        #[case] start: u64,
        #[case] end: u64,
        #[case] rate: u64,
        #[case] rent: u64,
        #[case] expected: u64,
    ) {
        assert_eq!(stream_funding_lamports(start, end, rate, rent).unwrap(), expected);
    }

    #[test]
    fn test_end_before_start() {
        let err = stream_funding_lamports(100, 0, 10, 0).unwrap_err();
        assert!(err.to_string().contains("before start_time"));
    }

    #[test]
    fn test_overflow() {
        assert!(streamed_total(0, u64::MAX, 2).is_err());
        assert!(stream_funding_lamports(0, u64::MAX, 1, 0).is_err());
        assert!(stream_funding_lamports(0, 1, 1, u64::MAX).is_err());
    }
}
