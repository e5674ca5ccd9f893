//! Random forest classifier for the eco-friendly flag.
//!
//! CART trees grown to purity on bootstrap samples, Gini impurity, a random
//! subset of features considered per split. Seeded, so two fits on the same
//! data produce identical forests.

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{entities::AttributeVector, error::ModelError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForestParams {
    pub trees: usize,
    pub seed: u64,
    /// Features examined per split; `None` means ⌊√6⌋.
    pub max_features: Option<usize>,
    pub min_samples_split: usize,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            trees: 100,
            seed: 42,
            max_features: None,
            min_samples_split: 2,
        }
    }
}

impl ForestParams {
    fn features_per_split(&self) -> usize {
        self.max_features
            .unwrap_or_else(|| (AttributeVector::LEN as f64).sqrt() as usize)
            .clamp(1, AttributeVector::LEN)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Node {
    Leaf {
        eco_probability: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Clone, Debug, PartialEq)]
struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    fn eco_probability(&self, attributes: &AttributeVector) -> f64 {
        let mut cursor = 0;
        loop {
            match &self.nodes[cursor] {
                Node::Leaf { eco_probability } => return *eco_probability,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    cursor = if attributes.get(*feature) <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

struct TreeBuilder<'a> {
    samples: &'a [AttributeVector],
    labels: &'a [bool],
    params: &'a ForestParams,
    nodes: Vec<Node>,
}

impl<'a> TreeBuilder<'a> {
    fn grow(mut self, indices: Vec<usize>, rng: &mut ChaCha8Rng) -> DecisionTree {
        self.build(indices, rng);
        DecisionTree { nodes: self.nodes }
    }

    fn build(&mut self, indices: Vec<usize>, rng: &mut ChaCha8Rng) -> usize {
        let slot = self.nodes.len();
        let positives = indices.iter().filter(|&&idx| self.labels[idx]).count();
        let eco_probability = positives as f64 / indices.len() as f64;
        self.nodes.push(Node::Leaf { eco_probability });

        let pure = positives == 0 || positives == indices.len();
        if pure || indices.len() < self.params.min_samples_split {
            return slot;
        }

        let Some(split) = self.best_split(&indices, rng) else {
            return slot;
        };

        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&idx| self.samples[idx].get(split.feature) <= split.threshold);

        let left = self.build(left, rng);
        let right = self.build(right, rng);
        self.nodes[slot] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        slot
    }

    /// Looks at `features_per_split` random features, drawing further ones
    /// only while no valid threshold has turned up.
    fn best_split(&self, indices: &[usize], rng: &mut ChaCha8Rng) -> Option<SplitCandidate> {
        let mut features: Vec<usize> = (0..AttributeVector::LEN).collect();
        features.shuffle(rng);

        let quota = self.params.features_per_split();
        let mut best: Option<SplitCandidate> = None;

        for (visited, feature) in features.into_iter().enumerate() {
            if visited >= quota && best.is_some() {
                break;
            }
            if let Some(candidate) = self.best_threshold(indices, feature) {
                let better = best
                    .as_ref()
                    .map(|current| candidate.impurity < current.impurity)
                    .unwrap_or(true);
                if better {
                    best = Some(candidate);
                }
            }
        }

        best
    }

    fn best_threshold(&self, indices: &[usize], feature: usize) -> Option<SplitCandidate> {
        let mut column: Vec<(f64, bool)> = indices
            .iter()
            .map(|&idx| (self.samples[idx].get(feature), self.labels[idx]))
            .collect();
        column.sort_by(|a, b| a.0.total_cmp(&b.0));

        let total = column.len();
        let total_positive = column.iter().filter(|(_, label)| *label).count();
        let mut left_positive = 0;
        let mut best: Option<SplitCandidate> = None;

        for cut in 0..total - 1 {
            if column[cut].1 {
                left_positive += 1;
            }
            let (lower, upper) = (column[cut].0, column[cut + 1].0);
            if lower == upper {
                continue;
            }

            let left_count = cut + 1;
            let right_count = total - left_count;
            let impurity = (left_count as f64 * gini(left_positive, left_count)
                + right_count as f64 * gini(total_positive - left_positive, right_count))
                / total as f64;

            let better = best
                .as_ref()
                .map(|current| impurity < current.impurity)
                .unwrap_or(true);
            if better {
                let mut threshold = lower + (upper - lower) / 2.0;
                if threshold >= upper {
                    threshold = lower;
                }
                best = Some(SplitCandidate {
                    feature,
                    threshold,
                    impurity,
                });
            }
        }

        best
    }
}

fn gini(positive: usize, count: usize) -> f64 {
    let p = positive as f64 / count as f64;
    1.0 - p * p - (1.0 - p) * (1.0 - p)
}

#[derive(Clone, Debug, PartialEq)]
pub struct EcoClassifier {
    trees: Vec<DecisionTree>,
}

impl EcoClassifier {
    pub fn fit(
        samples: &[AttributeVector],
        labels: &[bool],
        params: &ForestParams,
    ) -> Result<Self, ModelError> {
        if samples.len() != labels.len() {
            return Err(ModelError::LengthMismatch {
                samples: samples.len(),
                targets: labels.len(),
            });
        }
        if samples.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let tree_count = params.trees.max(1);
        let mut trees = Vec::with_capacity(tree_count);

        for _ in 0..tree_count {
            let bootstrap: Vec<usize> = (0..samples.len())
                .map(|_| rng.gen_range(0..samples.len()))
                .collect();
            let builder = TreeBuilder {
                samples,
                labels,
                params,
                nodes: Vec::new(),
            };
            trees.push(builder.grow(bootstrap, &mut rng));
        }

        Ok(Self { trees })
    }

    /// Mean of the leaf eco fractions across all trees.
    pub fn eco_probability(&self, attributes: &AttributeVector) -> f64 {
        let sum: f64 = self
            .trees
            .iter()
            .map(|tree| tree.eco_probability(attributes))
            .sum();
        sum / self.trees.len() as f64
    }

    pub fn predict_eco(&self, attributes: &AttributeVector) -> bool {
        self.eco_probability(attributes) > 0.5
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn accuracy(&self, samples: &[AttributeVector], labels: &[bool]) -> Option<f64> {
        if samples.is_empty() || samples.len() != labels.len() {
            return None;
        }
        let correct = samples
            .iter()
            .zip(labels)
            .filter(|(x, label)| self.predict_eco(x) == **label)
            .count();
        Some(correct as f64 / samples.len() as f64)
    }
}
