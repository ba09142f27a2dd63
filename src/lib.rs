//! # `dynbvh`
//!
//! A **dynamic bounding volume hierarchy** in Rust: add and remove volumes
//! online while the tree keeps itself balanced and query-ready, instead of
//! rebuilding from scratch every tick.
//!
//! ## What is this?
//!
//! A BVH is a binary tree in which every node's volume encloses the volumes
//! of its descendants, so point, region, and swept-motion queries can skip
//! whole subtrees at once. This crate maintains one **incrementally**: each
//! insertion descends by bound-growth cost and each removal promotes the
//! lost leaf's cousin, with local score-guided rotations keeping the tree
//! within one level of balance the whole time.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use dynbvh::{Bvh, Coordinate, Orthotope};
//!
//! let mut tree: Bvh<f32, Orthotope<f32, 2>, 2> = Bvh::new();
//!
//! let crate_box = Rc::new(Orthotope::new(Coordinate([2.0, 2.0]), Coordinate([2.0, 2.0])));
//! let barrel = Rc::new(Orthotope::new(Coordinate([7.0, 7.0]), Coordinate([3.0, 3.0])));
//!
//! assert!(tree.add(crate_box.clone()));
//! assert!(tree.add(barrel.clone()));
//! assert!(!tree.add(crate_box.clone())); // identity duplicates are rejected
//!
//! // Region query: drain overlapping volumes one call at a time.
//! let probe = Orthotope::new(Coordinate([1.0, 1.0]), Coordinate([2.0, 2.0]));
//! let mut cursor = tree.iter();
//! let hit = cursor.query(&probe).unwrap();
//! assert!(Rc::ptr_eq(hit, &crate_box));
//! assert!(cursor.query(&probe).is_none());
//!
//! // Swept intersection: where does a moving box first touch something?
//! let mover = Orthotope::new(Coordinate([0.0, 0.0]), Coordinate([1.0, 1.0]));
//! let mut cursor = tree.iter();
//! let (touched, t) = cursor.intersects(&mover, &Coordinate([4.0, 4.0])).unwrap();
//! assert!(Rc::ptr_eq(touched, &crate_box));
//! assert_eq!(t, 0.25);
//!
//! // Volumes are immutable while resident: move an object by re-adding it.
//! assert!(tree.remove(&crate_box));
//! assert!(tree.add(crate_box));
//! ```
//!
//! ## Key Features
//!
//! - **Online maintenance**: `O(log n)` add and remove with rotation-based
//!   rebalancing; no stop-the-world rebuilds.
//! - **Resumable queries**: the traversal [`Cursor`] hands back one result
//!   per call and picks up where it left off.
//! - **Swept intersection**: earliest-contact parameters for moving
//!   volumes, the broad-phase half of continuous collision detection.
//! - **Shape-generic**: any [`Volume`] works; axis-aligned [`Orthotope`]s
//!   and [`Sphere`]s ship in the crate, over `f32`/`f64`/`i32`/`i64`
//!   elements in any compile-time dimension count.
//! - **Bulk build**: [`Bvh::top_down`] for when the whole set is known up
//!   front.
//!
//! ## When to Use
//!
//! - Game and physics broad phases where the object set churns every tick
//! - Robotics and sandbox workloads with many queries per structural change
//! - Any spatial index where remove+re-add must not degrade the tree
//!
//! ## When NOT to Use
//!
//! - Static scenes queried forever: build once with a full-sweep SAH
//!   builder instead
//! - Deformable volumes mutated in place: residents are immutable by
//!   contract, so high-frequency deformation means constant re-adds
//! - Multithreaded mutation: the tree is single-threaded by design
//!
//! ## Algorithm
//!
//! Insertion walks toward the child whose bound would grow least, splits
//! the reached leaf, then retraces the path rotating any subtree that grew
//! past its sibling. Removal splices the leaf's cousin into its place and
//! rotates cousin grandchildren down where the splice left a two-level
//! gap. Both walks use the volume score (edge-length sum for boxes,
//! diameter for spheres) to pick among legal rotations, keeping total
//! score competitive with periodic full rebuilds at a fraction of the
//! cost.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod bvh;
mod coordinate;
mod cursor;
mod orthotope;
mod render;
mod scalar;
mod sphere;
mod volume;

pub use bvh::{Bvh, InvariantError};
pub use coordinate::Coordinate;
pub use cursor::Cursor;
pub use orthotope::Orthotope;
pub use scalar::Scalar;
pub use sphere::Sphere;
pub use volume::{Volume, is_hit, miss};

/// A hierarchy over axis-aligned boxes.
pub type OrthotopeTree<T, const N: usize> = Bvh<T, Orthotope<T, N>, N>;

/// A hierarchy over spheres.
pub type SphereTree<T, const N: usize> = Bvh<T, Sphere<T, N>, N>;
