use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use shared::{
    normalize_priority, week_start, RequestSequencer, ScheduleTask, ScheduleView,
    ScheduleViewBuilder, Task,
};

fn time_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        (0u32..24, 0u32..60).prop_map(|(h, m)| Some(format!("{:02}:{:02}", h, m))),
    ]
}

fn task_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("meal".to_string()),
        Just("cleaning".to_string()),
        Just("childcare".to_string()),
        Just("other".to_string()),
        "[a-z]{0,8}",
    ]
}

fn tasks_strategy() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec((time_strategy(), time_strategy(), task_type_strategy()), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (time, end_time, task_type))| {
                let raw: ScheduleTask = serde_json::from_value(serde_json::json!({
                    "id": i as u64,
                    "task_type": task_type,
                    "title": format!("task {}", i),
                    "time": time,
                    "end_time": end_time,
                }))
                .unwrap();
                Task::from(raw)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn timed_section_is_sorted(tasks in tasks_strategy()) {
        let view = ScheduleViewBuilder::day().build_day_view(&tasks);
        // ids are input positions
        let times: Vec<&str> = view
            .timed
            .iter()
            .filter_map(|t| tasks[t.id as usize].time.as_deref())
            .collect();
        prop_assert_eq!(times.len(), view.timed.len());
        prop_assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn every_task_lands_in_exactly_one_section(tasks in tasks_strategy()) {
        let view = ScheduleViewBuilder::day().build_day_view(&tasks);
        prop_assert_eq!(view.len(), tasks.len());

        let mut ids: Vec<u64> = view.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        let mut expected: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        expected.sort_unstable();
        prop_assert_eq!(ids, expected);

        for task in &tasks {
            let in_timed = view.timed.iter().any(|t| t.id == task.id);
            prop_assert_eq!(in_timed, task.is_timed());
        }
    }

    #[test]
    fn untimed_section_keeps_input_order(tasks in tasks_strategy()) {
        let view = ScheduleViewBuilder::calendar().build_day_view(&tasks);
        let untimed: Vec<u64> = view.untimed.iter().map(|t| t.id).collect();
        let expected: Vec<u64> = tasks.iter().filter(|t| !t.is_timed()).map(|t| t.id).collect();
        prop_assert_eq!(untimed, expected);
    }

    #[test]
    fn week_start_is_monday(days in -20_000i64..20_000, offset in -10i64..10) {
        let today = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(days);
        let start = week_start(today, offset);
        prop_assert_eq!(start.weekday(), Weekday::Mon);

        let anchor = today + Duration::days(7 * offset);
        prop_assert!(start <= anchor);
        prop_assert!(anchor - start < Duration::days(7));
    }

    #[test]
    fn priority_normalization_is_idempotent(raw in prop_oneof![
        (-100i64..100).prop_map(|n| n.to_string()),
        "(?i)(high|medium|low)",
        ".{0,6}",
    ]) {
        let once = normalize_priority(Some(&raw));
        prop_assert_eq!(normalize_priority(Some(once.as_str())), once);
    }

    #[test]
    fn only_latest_ticket_is_accepted(requests in prop::collection::vec(0usize..3, 1..30)) {
        let mut sequencer = RequestSequencer::new();
        let tickets: Vec<_> = requests
            .iter()
            .map(|i| sequencer.begin(ScheduleView::ALL[*i]))
            .collect();

        for (pos, ticket) in tickets.iter().enumerate() {
            let superseded = tickets[pos + 1..].iter().any(|t| t.key() == ticket.key());
            prop_assert_eq!(sequencer.accept(ticket), !superseded);
        }
    }
}
