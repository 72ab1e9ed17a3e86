use crate::KnapsackError;
use crate::entities::KPInstance;
use crate::io::ext_repr::ExtInstance;

/// Converts an [`ExtInstance`] into a validated [`KPInstance`].
/// Profits are kept in the given order.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<KPInstance, KnapsackError> {
    let ExtInstance {
        capacity,
        weights,
        profits,
    } = ext_instance;

    let capacity = u64::try_from(*capacity).map_err(|_| KnapsackError::NegativeCapacity(*capacity))?;

    let weights = weights
        .iter()
        .enumerate()
        .map(|(id, &weight)| {
            u64::try_from(weight).map_err(|_| KnapsackError::NegativeWeight { id, weight })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let profits = profits
        .iter()
        .enumerate()
        .map(|(id, &profit)| {
            u64::try_from(profit).map_err(|_| KnapsackError::NegativeProfit { id, profit })
        })
        .collect::<Result<Vec<_>, _>>()?;

    KPInstance::new(capacity, weights, profits)
}

/// Validates the capacity and number of items requested by a caller.
pub fn import_dimensions(capacity: i64, n_items: i64) -> Result<(u64, usize), KnapsackError> {
    let capacity = u64::try_from(capacity).map_err(|_| KnapsackError::NegativeCapacity(capacity))?;
    let n_items = usize::try_from(n_items).map_err(|_| KnapsackError::NegativeItemCount(n_items))?;
    Ok((capacity, n_items))
}
