use super::*;

#[test]
fn forward_selects_window_maxima() {
    let pool = example_layer();
    let batch = vec![example_plate()];

    let (pooled, positions) = pool.forward(&batch).unwrap();

    assert_eq!(pooled.len(), 1);
    assert_eq!(pooled[0], arr2(&[[4.0, 9.0], [5.0, 8.0]]));
    assert_eq!(positions.plate_count(), 1);
}

#[test]
fn forward_is_deterministic() {
    let pool = example_layer();
    let batch = vec![example_plate(), example_plate().t().to_owned()];

    let (first, _) = pool.forward(&batch).unwrap();
    let (second, _) = pool.forward(&batch).unwrap();

    assert_eq!(first, second);
}

#[test]
fn backward_routes_gradient_to_recorded_maxima() {
    let pool = example_layer();
    let batch = vec![example_plate()];

    let (_, positions) = pool.forward(&batch).unwrap();

    let grad = vec![arr2(&[[10.0, 20.0], [30.0, 40.0]])];
    let upstream = pool.backward(&grad, &positions, 0.01).unwrap();

    // 20.0 lands at (0, 3): both (0, 3) and (1, 3) hold 9.0, and the first
    // one in row-major scan order wins
    let expected = arr2(&[
        [0.0, 0.0, 0.0, 20.0],
        [10.0, 0.0, 0.0, 0.0],
        [30.0, 0.0, 40.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
    ]);
    assert_eq!(upstream[0], expected);
}

#[test]
fn trailing_windows_are_reduced_over_in_bounds_cells() {
    let pool = example_layer();
    let batch = vec![arr2(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])];

    let (pooled, positions) = pool.forward(&batch).unwrap();

    // 3x3 plate with a 2x2 window: the trailing row/column windows cover
    // two cells, the bottom-right corner window covers one
    assert_eq!(pooled[0], arr2(&[[5.0, 6.0], [8.0, 9.0]]));

    let grad = vec![arr2(&[[1.0, 2.0], [3.0, 4.0]])];
    let upstream = pool.backward(&grad, &positions, 0.0).unwrap();

    let expected = arr2(&[[0.0, 0.0, 0.0], [0.0, 1.0, 2.0], [0.0, 3.0, 4.0]]);
    assert_eq!(upstream[0], expected);
}

#[test]
fn single_cell_plate_pools_to_itself() {
    let pool = MaxPooling2D::new(PoolWindow {
        height: 3,
        width: 3,
    })
    .unwrap();
    let batch = vec![arr2(&[[42.0]])];

    let (pooled, positions) = pool.forward(&batch).unwrap();
    assert_eq!(pooled[0], arr2(&[[42.0]]));

    let upstream = pool.backward(&[arr2(&[[7.0]])], &positions, 0.0).unwrap();
    assert_eq!(upstream[0], arr2(&[[7.0]]));
}

#[test]
fn size_calculators_match_forward_shapes() {
    let pool = MaxPooling2D::new(PoolWindow {
        height: 2,
        width: 3,
    })
    .unwrap();

    assert_eq!(pool.output_height(4), 2);
    assert_eq!(pool.output_height(5), 3);
    assert_eq!(pool.output_width(6), 2);
    assert_eq!(pool.output_width(7), 3);

    // Pooling never changes the number of plates in a batch
    assert_eq!(pool.output_plate_count(1), 1);
    assert_eq!(pool.output_plate_count(16), 16);

    let batch = vec![Plate::zeros((5, 7))];
    let (pooled, _) = pool.forward(&batch).unwrap();
    assert_eq!(
        pooled[0].dim(),
        (pool.output_height(5), pool.output_width(7))
    );
}

#[test]
fn zero_window_dimensions_are_rejected() {
    let err = MaxPooling2D::new(PoolWindow {
        height: 0,
        width: 2,
    })
    .unwrap_err();
    match err {
        ModelError::InputValidationError(msg) => assert!(msg.contains("height")),
        other => panic!("unexpected error: {:?}", other),
    }

    let err = MaxPooling2D::new(PoolWindow {
        height: 2,
        width: 0,
    })
    .unwrap_err();
    match err {
        ModelError::InputValidationError(msg) => assert!(msg.contains("width")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn empty_plates_are_rejected() {
    let pool = example_layer();
    let batch = vec![Plate::zeros((0, 3))];

    assert!(matches!(
        pool.forward(&batch),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn backward_rejects_mismatched_gradient_batches() {
    let pool = example_layer();
    let batch = vec![example_plate(), example_plate()];
    let (_, positions) = pool.forward(&batch).unwrap();

    // Wrong plate count
    let short = vec![arr2(&[[1.0, 2.0], [3.0, 4.0]])];
    assert!(matches!(
        pool.backward(&short, &positions, 0.0),
        Err(ModelError::InputValidationError(_))
    ));

    // Wrong plate shape
    let wrong_shape = vec![Plate::zeros((2, 2)), Plate::zeros((3, 2))];
    assert!(matches!(
        pool.backward(&wrong_shape, &positions, 0.0),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn introspection_reports_window_geometry() {
    let pool = MaxPooling2D::new(PoolWindow {
        height: 3,
        width: 2,
    })
    .unwrap();

    assert_eq!(pool.layer_type(), "MaxPooling2D");
    assert_eq!(pool.window_height(), 3);
    assert_eq!(pool.window_width(), 2);

    let description = pool.describe();
    assert!(description.contains("window height: 3"));
    assert!(description.contains("window width: 2"));

    // Pooling has no trainable parameters
    assert_eq!(pool.param_count(), 0);
}
