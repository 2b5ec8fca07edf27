//! CSV rendering for reports.

use crate::types::{BatchReport, SweepRecord};

/// Renders the two-column Metric/Value table, values rounded to 2 dp.
pub fn render_batch_csv(report: &BatchReport) -> String {
    let rows: [(&str, f64); 10] = [
        ("Oil Yield (%)", report.yields.oil_pct),
        ("Wax Yield (%)", report.yields.wax_pct),
        ("Char (%)", report.yields.char_pct),
        ("NCG (%)", report.yields.ncg_pct),
        ("Oil Output (L)", report.oil.total_l),
        ("C5–C10 (L)", report.oil.light_l),
        ("C11–C17 (L)", report.oil.mid_l),
        ("C18–C24 (L)", report.oil.heavy_l),
        ("Profit (₹)", report.economics.profit),
        ("ROI (%)", report.economics.roi_pct),
    ];

    let mut csv = String::from("Metric,Value\n");
    for (metric, value) in rows {
        csv.push_str(&format!("{},{:.2}\n", metric, value));
    }
    csv
}

/// Renders the temperature sweep as a three-column table.
pub fn render_sweep_csv(points: &[SweepRecord]) -> String {
    let mut csv = String::from("Temperature (°C),Oil Yield (%),Wax Yield (%)\n");
    for point in points {
        csv.push_str(&format!(
            "{},{:.2},{:.2}\n",
            point.temp_c, point.oil_pct, point.wax_pct
        ));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EconomicsSummary, OilVolumes, StreamMasses, YieldSummary};

    fn sample_report() -> BatchReport {
        BatchReport {
            yields: YieldSummary {
                oil_pct: 75.0,
                wax_pct: 5.0,
                char_pct: 10.0,
                ncg_pct: 10.0,
            },
            streams: StreamMasses {
                oil_kg: 7500.0,
                wax_kg: 500.0,
                char_kg: 1000.0,
                ncg_kg: 1000.0,
            },
            oil: OilVolumes {
                total_l: 9305.2109,
                light_l: 2622.3776,
                mid_l: 4573.1707,
                heavy_l: 2118.644,
            },
            economics: EconomicsSummary {
                revenue: 573312.655,
                total_cost: 115000.0,
                profit: 458312.655,
                roi_pct: 398.5327,
            },
        }
    }

    #[test]
    fn batch_table_has_header_and_ten_rows() {
        let csv = render_batch_csv(&sample_report());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Metric,Value");
    }

    #[test]
    fn values_are_rounded_to_two_decimals() {
        let csv = render_batch_csv(&sample_report());
        assert!(csv.contains("Oil Output (L),9305.21\n"));
        assert!(csv.contains("ROI (%),398.53\n"));
    }

    #[test]
    fn metric_labels_match_the_report_convention() {
        let csv = render_batch_csv(&sample_report());
        for label in [
            "Oil Yield (%)",
            "Wax Yield (%)",
            "Char (%)",
            "NCG (%)",
            "C5–C10 (L)",
            "C11–C17 (L)",
            "C18–C24 (L)",
            "Profit (₹)",
        ] {
            assert!(csv.contains(label), "missing metric label {label}");
        }
    }

    #[test]
    fn sweep_table_renders_one_line_per_point() {
        let points = vec![
            SweepRecord {
                temp_c: 400.0,
                oil_pct: 69.0,
                wax_pct: 8.0,
            },
            SweepRecord {
                temp_c: 410.0,
                oil_pct: 69.857,
                wax_pct: 7.571,
            },
        ];
        let csv = render_sweep_csv(&points);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "400,69.00,8.00");
        assert_eq!(lines[2], "410,69.86,7.57");
    }

    #[test]
    fn empty_sweep_is_header_only() {
        let csv = render_sweep_csv(&[]);
        assert_eq!(csv, "Temperature (°C),Oil Yield (%),Wax Yield (%)\n");
    }
}
