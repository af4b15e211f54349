use strata::config::{
    Acyclicer, LayoutConfig, MAX_SIMPLEX_ITERATIONS, NODE_SPACING, ORDER_STALE_ROUNDS,
    RANK_SPACING, RankDir, Ranker,
};
use strata::Error;

#[test]
fn defaults() {
    let config = LayoutConfig::default();
    assert_eq!(config.ranker, Ranker::NetworkSimplex);
    assert_eq!(config.acyclicer, Acyclicer::Dfs);
    assert_eq!(config.rankdir, RankDir::LR);
    assert_eq!(config.node_spacing, NODE_SPACING);
    assert_eq!(config.rank_spacing, RANK_SPACING);
    assert_eq!(config.node_spacing, 100.0);
    assert_eq!(config.rank_spacing, 100.0);
    assert_eq!(config.order_stale_rounds, ORDER_STALE_ROUNDS);
    assert_eq!(config.max_simplex_iterations, MAX_SIMPLEX_ITERATIONS);
    assert!(config.validate().is_ok());
}

#[test]
fn from_json_fills_missing_keys_with_defaults() {
    let config =
        LayoutConfig::from_json(r#"{"ranker":"tight-tree","acyclicer":"greedy","nodeSpacing":40}"#)
            .unwrap();
    assert_eq!(config.ranker, Ranker::TightTree);
    assert_eq!(config.acyclicer, Acyclicer::Greedy);
    assert_eq!(config.node_spacing, 40.0);
    assert_eq!(config.rank_spacing, RANK_SPACING);

    assert_eq!(LayoutConfig::from_json("{}").unwrap(), LayoutConfig::default());
}

#[test]
fn from_json_reads_every_key() {
    let config = LayoutConfig::from_json(
        r#"{
            "ranker": "longest-path",
            "acyclicer": "dfs",
            "rankdir": "TB",
            "nodeSpacing": 10,
            "rankSpacing": 20,
            "orderStaleRounds": 3,
            "maxSimplexIterations": 50
        }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        LayoutConfig {
            ranker: Ranker::LongestPath,
            acyclicer: Acyclicer::Dfs,
            rankdir: RankDir::TB,
            node_spacing: 10.0,
            rank_spacing: 20.0,
            order_stale_rounds: 3,
            max_simplex_iterations: 50,
        }
    );
}

#[test]
fn from_json_rejects_unknown_values_and_bad_numbers() {
    for text in [
        r#"{"ranker":"fastest"}"#,
        r#"{"rankSpacing":-5}"#,
        r#"{"orderStaleRounds":0}"#,
        r#"{"maxSimplexIterations":0}"#,
        "not json",
    ] {
        assert!(
            matches!(LayoutConfig::from_json(text), Err(Error::InvalidConfig { .. })),
            "{text}"
        );
    }
}

#[test]
fn serializes_with_camel_case_keys() {
    let json = serde_json::to_value(LayoutConfig::default()).unwrap();
    assert_eq!(json["ranker"], "network-simplex");
    assert_eq!(json["acyclicer"], "dfs");
    assert_eq!(json["rankdir"], "LR");
    assert_eq!(json["nodeSpacing"], 100.0);
    assert_eq!(json["maxSimplexIterations"], 10_000);
}

#[test]
fn enums_parse_and_display() {
    for ranker in [Ranker::LongestPath, Ranker::TightTree, Ranker::NetworkSimplex] {
        assert_eq!(ranker.to_string().parse::<Ranker>().unwrap(), ranker);
    }
    for acyclicer in [Acyclicer::Dfs, Acyclicer::Greedy] {
        assert_eq!(acyclicer.to_string().parse::<Acyclicer>().unwrap(), acyclicer);
    }
    for rankdir in [RankDir::LR, RankDir::RL, RankDir::TB, RankDir::BT] {
        assert_eq!(rankdir.to_string().parse::<RankDir>().unwrap(), rankdir);
    }
    assert_eq!("td".parse::<RankDir>().unwrap(), RankDir::TB);
    assert_eq!(" rl ".parse::<RankDir>().unwrap(), RankDir::RL);
}

#[test]
fn from_json_accepts_every_spelling_the_parser_does() {
    for (text, rankdir) in [
        (r#"{"rankdir":"TD"}"#, RankDir::TB),
        (r#"{"rankdir":"tb"}"#, RankDir::TB),
        (r#"{"rankdir":"rl"}"#, RankDir::RL),
        (r#"{"rankdir":" BT "}"#, RankDir::BT),
    ] {
        assert_eq!(LayoutConfig::from_json(text).unwrap().rankdir, rankdir, "{text}");
    }
    let config = LayoutConfig::from_json(r#"{"ranker":" tight-tree","acyclicer":"greedy "}"#)
        .unwrap();
    assert_eq!(config.ranker, Ranker::TightTree);
    assert_eq!(config.acyclicer, Acyclicer::Greedy);

    let err = LayoutConfig::from_json(r#"{"rankdir":"up"}"#).unwrap_err();
    assert!(
        matches!(err, Error::InvalidConfig { ref message } if message.contains("up")),
        "{err}"
    );
}

#[test]
fn unknown_names_report_what_was_given() {
    assert!(matches!(
        "simplex".parse::<Ranker>(),
        Err(Error::UnknownRanker { ref name }) if name == "simplex"
    ));
    assert!(matches!(
        "bfs".parse::<Acyclicer>(),
        Err(Error::UnknownAcyclicer { ref name }) if name == "bfs"
    ));
    assert!(matches!(
        "up".parse::<RankDir>(),
        Err(Error::UnknownRankDir { ref name }) if name == "up"
    ));
}

#[test]
fn rankdir_axes() {
    assert!(RankDir::LR.is_horizontal() && !RankDir::LR.is_reversed());
    assert!(RankDir::RL.is_horizontal() && RankDir::RL.is_reversed());
    assert!(!RankDir::TB.is_horizontal() && !RankDir::TB.is_reversed());
    assert!(!RankDir::BT.is_horizontal() && RankDir::BT.is_reversed());
}
