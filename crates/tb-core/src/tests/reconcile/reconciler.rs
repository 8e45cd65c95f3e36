use crate::tests::{FakeColumn, project_with_id, uuid};
use crate::{diff, reconcile, RenderedList};

#[test]
fn given_abc_rendered_and_bcd_target_when_reconciled_then_d_in_a_out() {
    // Given: rendered {A,B,C}, target {B,C,D}
    let (a, b, c, d) = (uuid(1), uuid(2), uuid(3), uuid(4));
    let mut column = FakeColumn::with_ids(&[a, b, c]);
    let target = vec![project_with_id(b), project_with_id(c), project_with_id(d)];

    // When
    reconcile(&mut column, &target);

    // Then: exactly D inserted, exactly A removed, B and C untouched
    assert_eq!(column.insert_calls, vec![d]);
    assert_eq!(column.remove_calls, vec![a]);
    assert_eq!(column.rendered_ids(), vec![b, c, d]);
}

#[test]
fn given_matching_rendered_and_target_when_reconciled_then_no_work() {
    let (a, b) = (uuid(1), uuid(2));
    let mut column = FakeColumn::with_ids(&[a, b]);
    let target = vec![project_with_id(a), project_with_id(b)];

    reconcile(&mut column, &target);

    assert!(column.insert_calls.is_empty());
    assert!(column.remove_calls.is_empty());
    assert_eq!(column.rendered_ids(), vec![a, b]);
}

#[test]
fn given_reconciled_column_when_reconciled_again_then_idempotent() {
    // Given: one pass already applied
    let (a, b, c) = (uuid(1), uuid(2), uuid(3));
    let mut column = FakeColumn::with_ids(&[a]);
    let target = vec![project_with_id(b), project_with_id(c)];
    reconcile(&mut column, &target);
    column.clear_log();

    // When: the same target is applied a second time
    reconcile(&mut column, &target);

    // Then: no additional insertions or removals
    assert!(column.insert_calls.is_empty());
    assert!(column.remove_calls.is_empty());
}

#[test]
fn given_same_size_swap_when_reconciled_then_swap_is_detected() {
    // Equal cardinality before the pass; the count gate still fires because
    // the counts differ after the insertion phase
    let (a, b, c) = (uuid(1), uuid(2), uuid(3));
    let mut column = FakeColumn::with_ids(&[a, b]);
    let target = vec![project_with_id(b), project_with_id(c)];

    reconcile(&mut column, &target);

    assert_eq!(column.insert_calls, vec![c]);
    assert_eq!(column.remove_calls, vec![a]);
    assert_eq!(column.rendered_ids(), vec![b, c]);
}

#[test]
fn given_empty_target_when_reconciled_then_everything_removed() {
    let (a, b) = (uuid(1), uuid(2));
    let mut column = FakeColumn::with_ids(&[a, b]);

    reconcile(&mut column, &[]);

    assert!(column.insert_calls.is_empty());
    assert_eq!(column.remove_calls, vec![a, b]);
    assert!(column.rendered_ids().is_empty());
}

#[test]
fn given_empty_rendered_when_reconciled_then_target_appended_in_order() {
    let (a, b, c) = (uuid(1), uuid(2), uuid(3));
    let mut column = FakeColumn::with_ids(&[]);
    let target = vec![project_with_id(c), project_with_id(a), project_with_id(b)];

    reconcile(&mut column, &target);

    assert_eq!(column.rendered_ids(), vec![c, a, b]);
    assert!(column.remove_calls.is_empty());
}

#[test]
fn given_abc_rendered_and_bcd_target_when_diffed_then_insert_d_remove_a() {
    let (a, b, c, d) = (uuid(1), uuid(2), uuid(3), uuid(4));
    let target = vec![project_with_id(b), project_with_id(c), project_with_id(d)];

    let result = diff(&[a, b, c], &target);

    assert_eq!(result.insertions, vec![d]);
    assert_eq!(result.removals, vec![a]);
    assert!(!result.is_empty());
}

#[test]
fn given_matching_sets_when_diffed_then_empty() {
    let (a, b) = (uuid(1), uuid(2));
    let target = vec![project_with_id(b), project_with_id(a)];

    let result = diff(&[a, b], &target);

    assert!(result.is_empty());
}

#[test]
fn given_diff_results_when_applied_then_orders_preserved() {
    // Insertions come back in target order, removals in rendered order
    let (a, b, c, d, e) = (uuid(1), uuid(2), uuid(3), uuid(4), uuid(5));
    let target = vec![project_with_id(e), project_with_id(d)];

    let result = diff(&[a, b, c], &target);

    assert_eq!(result.insertions, vec![e, d]);
    assert_eq!(result.removals, vec![a, b, c]);
}
