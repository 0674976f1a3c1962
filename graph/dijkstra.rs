use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::error::AlgoError;
use crate::graph::Graph;

/// 单源最短路径的计算结果
///
/// 不可达的节点不会出现在 distances / previous 中。
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// 起点
    pub start: String,
    /// 每个可达节点的最短距离
    pub distances: HashMap<String, u64>,
    /// 最短路径树中每个节点的前驱（起点自身没有前驱）
    pub previous: HashMap<String, String>,
}

impl ShortestPaths {
    /// 到 target 的最短距离，不可达时返回 None
    pub fn distance_to(&self, target: &str) -> Option<u64> {
        self.distances.get(target).copied()
    }

    /// 沿前驱重建从起点到 target 的最短路径，不可达时返回 None
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        if !self.distances.contains_key(target) {
            return None;
        }

        let mut path = vec![target.to_string()];
        let mut current = target;
        while let Some(prev) = self.previous.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra 最短路径 - 最小堆逐个确定距离最近的未处理节点
///
/// 不支持负权重（Graph 的权重类型本身是无符号数）。
/// 堆中使用惰性删除：同一节点可能入堆多次，出堆时距离已经
/// 不是最优的条目直接跳过。
pub fn shortest_paths(graph: &Graph, start: &str) -> Result<ShortestPaths, AlgoError> {
    if !graph.contains(start) {
        return Err(AlgoError::UnknownNode(start.to_string()));
    }

    let mut distances: HashMap<String, u64> = HashMap::new();
    let mut previous: HashMap<String, String> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start.to_string(), 0);
    queue.push(Reverse((0u64, start.to_string())));

    while let Some(Reverse((dist, node))) = queue.pop() {
        // 过期条目：该节点已经有更短的距离
        if dist > *distances.get(&node).unwrap_or(&u64::MAX) {
            trace!(%node, dist, "stale queue entry skipped");
            continue;
        }

        let Some(neighbors) = graph.neighbors(&node) else {
            continue;
        };

        for (neighbor, &weight) in neighbors {
            let candidate = dist + weight;
            let known = distances.get(neighbor).copied().unwrap_or(u64::MAX);

            if candidate < known {
                trace!(from = %node, to = %neighbor, candidate, "shorter path found");
                distances.insert(neighbor.clone(), candidate);
                previous.insert(neighbor.clone(), node.clone());
                queue.push(Reverse((candidate, neighbor.clone())));
            }
        }
    }

    Ok(ShortestPaths {
        start: start.to_string(),
        distances,
        previous,
    })
}
