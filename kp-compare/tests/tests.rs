#[cfg(test)]
mod tests {
    use anyhow::Result;
    use clap::Parser;
    use knapsack_rs::KnapsackError;
    use knapsack_rs::io::ext_repr::ExtInstance;
    use kp_compare::config::KPCConfig;
    use kp_compare::io;
    use kp_compare::io::cli::{Cli, Request};
    use kp_compare::io::output::KPCOutput;
    use log::LevelFilter;
    use test_case::test_case;

    fn init_test_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn seeded_config(seed: u64) -> KPCConfig {
        KPCConfig {
            prng_seed: Some(seed),
            ..KPCConfig::default()
        }
    }

    #[test_case(5, vec![2, 3, 4, 5], vec![10, 8, 6, 4], (5, 18, vec![1, 2]), (5, 18, vec![1, 2]); "greedy matches optimum")]
    #[test_case(10, vec![5, 4, 6, 3], vec![10, 40, 30, 50], (9, 50, vec![1, 2]), (7, 90, vec![2, 4]); "greedy falls short")]
    #[test_case(0, vec![3, 1], vec![2, 1], (0, 0, vec![]), (0, 0, vec![]); "zero capacity")]
    #[test_case(7, vec![], vec![], (0, 0, vec![]), (0, 0, vec![]); "no items")]
    fn fixed_instance(
        capacity: i64,
        weights: Vec<i64>,
        profits: Vec<i64>,
        greedy: (u64, u64, Vec<usize>),
        dp: (u64, u64, Vec<usize>),
    ) -> Result<()> {
        init_test_logger();
        let request = Request::Fixed(ExtInstance {
            capacity,
            weights,
            profits,
        });
        let KPCOutput { report, .. } = kp_compare::run(&request, KPCConfig::default())?;

        assert_eq!(
            (report.greedy.total_weight, report.greedy.total_profit, report.greedy.items),
            greedy
        );
        assert_eq!(
            (
                report.dp.solution.total_weight,
                report.dp.solution.total_profit,
                report.dp.solution.items
            ),
            dp
        );
        Ok(())
    }

    #[test_case(0, 0; "empty")]
    #[test_case(0, 25; "zero capacity")]
    #[test_case(100, 0; "no items")]
    #[test_case(100, 10; "small")]
    #[test_case(1000, 100; "medium")]
    fn random_instance(capacity: i64, n_items: i64) -> Result<()> {
        init_test_logger();
        let request = Request::Random { capacity, n_items };
        let output = kp_compare::run(&request, seeded_config(0))?;
        let report = output.report;

        assert_eq!(report.capacity, capacity as u64);
        assert_eq!(report.items.len(), n_items as usize);
        assert!(report.items.iter().enumerate().all(|(i, item)| item.no == i + 1));
        assert!(report.items.iter().all(|i| (1..100).contains(&i.weight)));
        assert!(report.items.windows(2).all(|w| w[0].profit >= w[1].profit));
        assert!(report.greedy.total_weight <= report.capacity);
        assert!(report.dp.solution.total_weight <= report.capacity);
        assert!(report.dp.solution.total_profit >= report.greedy.total_profit);
        assert!(report.greedy.items.windows(2).all(|w| w[0] < w[1]));
        assert!(report.dp.solution.items.windows(2).all(|w| w[0] < w[1]));
        assert!(report.greedy_time_ms.is_some());
        Ok(())
    }

    #[test]
    fn same_seed_same_report() -> Result<()> {
        let request = Request::Random {
            capacity: 300,
            n_items: 40,
        };
        let a = kp_compare::run(&request, seeded_config(9))?.report;
        let b = kp_compare::run(&request, seeded_config(9))?.report;
        assert_eq!(a.items, b.items);
        assert_eq!(a.greedy, b.greedy);
        assert_eq!(a.dp, b.dp);
        Ok(())
    }

    #[test_case(-1, 5, KnapsackError::NegativeCapacity(-1); "negative capacity")]
    #[test_case(5, -1, KnapsackError::NegativeItemCount(-1); "negative item count")]
    fn invalid_request(capacity: i64, n_items: i64, expected: KnapsackError) {
        let request = Request::Random { capacity, n_items };
        let err = kp_compare::run(&request, KPCConfig::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<KnapsackError>(), Some(&expected));
    }

    #[test_case(vec![0, 3], vec![5, 10], KnapsackError::ZeroWeight { id: 0 }; "weightless item")]
    #[test_case(vec![1, 1, 1], vec![i64::MAX; 3], KnapsackError::ValueOverflow; "overflowing profits")]
    fn invalid_fixed_instance(weights: Vec<i64>, profits: Vec<i64>, expected: KnapsackError) {
        let request = Request::Fixed(ExtInstance {
            capacity: 3,
            weights,
            profits,
        });
        let err = kp_compare::run(&request, KPCConfig::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<KnapsackError>(), Some(&expected));
    }

    #[test]
    fn oversized_table_is_refused() {
        let mut config = seeded_config(0);
        config.comparison.max_table_cells = Some(1_000);
        let request = Request::Random {
            capacity: 1_000,
            n_items: 10,
        };
        let err = kp_compare::run(&request, config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KnapsackError>(),
            Some(KnapsackError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn partial_config_falls_back_to_defaults() -> Result<()> {
        let config: KPCConfig = serde_json::from_str(r#"{"prng_seed": 3}"#)?;
        assert_eq!(config.prng_seed, Some(3));
        assert_eq!(config.comparison, KPCConfig::default().comparison);

        let config: KPCConfig = serde_json::from_str(
            r#"{"comparison": {"generator": {"min_value": 10, "max_value": 20}, "max_table_cells": null}}"#,
        )?;
        assert_eq!(config.prng_seed, None);
        assert_eq!(config.comparison.generator.min_value, 10);
        assert_eq!(config.comparison.max_table_cells, None);
        assert!(config.comparison.time_solvers);
        Ok(())
    }

    #[test]
    fn cli_parses_request() -> Result<()> {
        let cli = Cli::try_parse_from(["kp-compare", "-c", "50", "-n", "10", "-l", "debug"])?;
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert_eq!(
            cli.request()?,
            Request::Random {
                capacity: 50,
                n_items: 10
            }
        );
        assert_eq!(cli.output_stem(), "c50_n10");

        let cli = Cli::try_parse_from(["kp-compare", "--capacity", "-3", "--n-items", "2"])?;
        assert_eq!(cli.capacity, Some(-3));

        assert!(Cli::try_parse_from(["kp-compare", "-c", "abc", "-n", "2"]).is_err());
        assert!(Cli::try_parse_from(["kp-compare", "-c", "5"]).is_err());
        Ok(())
    }

    #[test]
    fn report_is_written_and_read_back() -> Result<()> {
        let folder = std::env::temp_dir().join("kp-compare-tests");
        std::fs::create_dir_all(&folder)?;

        let instance_path = folder.join("adversarial.json");
        std::fs::write(
            &instance_path,
            r#"{"capacity": 10, "weights": [5, 4, 6, 3], "profits": [10, 40, 30, 50]}"#,
        )?;

        let cli = Cli::try_parse_from([
            "kp-compare",
            "-i",
            instance_path.to_str().unwrap(),
        ])?;
        assert_eq!(cli.output_stem(), "adversarial");

        let output = kp_compare::run(&cli.request()?, KPCConfig::default())?;
        let report_path = folder.join(format!("report_{}.json", cli.output_stem()));
        io::write_json(&output, &report_path)?;

        let read_back: KPCOutput =
            serde_json::from_reader(std::fs::File::open(&report_path)?)?;
        assert_eq!(read_back.report.dp.solution.total_profit, 90);
        assert_eq!(read_back.report.greedy.items, vec![1, 2]);
        assert_eq!(read_back.config, KPCConfig::default());
        Ok(())
    }
}
