//! Reference inputs shaped like a node's RPC output for a deposit.
//!
//! Both carry keys the deposit schema ignores (`nonce`, `v`, `r`, `s`,
//! `hash`, …), most of them `null`.

/// A deposit without a `gas` key. Decoding fails with
/// `missing required field: gas`.
pub const MISSING_GAS: &str = concat!(
    r#"{"type":126,"nonce":null,"gasPrice":null,"maxPriorityFeePerGas":null,"#,
    r#""maxFeePerGas":null,"value":1,"input":"0x616263646566","v":null,"r":null,"#,
    r#""s":null,"to":null,"#,
    r#""sourceHash":"0x0000000000000000000000000000000000000000000000000000000000000000","#,
    r#""from":"0x0000000000000000000000000000000000000001","isSystemTx":false,"#,
    r#""hash":"0xa4341f3db4363b7ca269a8538bd027b2f8784f84454ca917668642d5f6dffdf9"}"#,
);

/// [`MISSING_GAS`] with `"gas":"0x5208"` added. Decodes with gas 21000.
pub const WITH_GAS: &str = concat!(
    r#"{"type":126,"nonce":null,"gasPrice":null,"maxPriorityFeePerGas":null,"#,
    r#""maxFeePerGas":null,"gas":"0x5208","value":1,"input":"0x616263646566","v":null,"#,
    r#""r":null,"s":null,"to":null,"#,
    r#""sourceHash":"0x0000000000000000000000000000000000000000000000000000000000000000","#,
    r#""from":"0x0000000000000000000000000000000000000001","isSystemTx":false,"#,
    r#""hash":"0xa4341f3db4363b7ca269a8538bd027b2f8784f84454ca917668642d5f6dffdf9"}"#,
);
