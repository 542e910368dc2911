//! 探索モジュールのテスト
