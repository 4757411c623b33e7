//! Ventanas de paginación.
//!
//! Cada familia de listados calcula su botonera de páginas a su manera y
//! las diferencias son de comportamiento observable, así que se mantienen
//! como tres funciones separadas en vez de unificarse:
//!
//! - `ventana_clasica`: hasta 5 botones numerados alrededor de la página
//!   actual, con puntos suspensivos en los bordes recortados (la mayoría
//!   de los listados).
//! - `ventana_limites`: primera y última siempre visibles, ventana ±1 y
//!   puntos calculados por borde; un hueco de una sola página se muestra
//!   como número (listado de productos).
//! - `ventana_adyacente`: ventana ±1 con puntos en ambos puntos de corte,
//!   aunque el hueco sea de una sola página (listado de usuarios).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPagina {
    Numero(i64),
    PuntosSuspensivos,
}

pub fn ventana_clasica(actual: i64, total: i64) -> Vec<ItemPagina> {
    if total <= 0 {
        return Vec::new();
    }
    if total <= 5 {
        return (1..=total).map(ItemPagina::Numero).collect();
    }
    let inicio = (actual - 2).clamp(1, total - 4);
    let fin = inicio + 4;

    let mut items = Vec::new();
    if inicio > 1 {
        items.push(ItemPagina::PuntosSuspensivos);
    }
    items.extend((inicio..=fin).map(ItemPagina::Numero));
    if fin < total {
        items.push(ItemPagina::PuntosSuspensivos);
    }
    items
}

pub fn ventana_limites(actual: i64, total: i64) -> Vec<ItemPagina> {
    if total <= 0 {
        return Vec::new();
    }
    let mut paginas: Vec<i64> = vec![1];
    for p in (actual - 1)..=(actual + 1) {
        if p > 1 && p < total {
            paginas.push(p);
        }
    }
    if total > 1 {
        paginas.push(total);
    }
    paginas.sort_unstable();
    paginas.dedup();

    let mut items = Vec::new();
    for (i, &pagina) in paginas.iter().enumerate() {
        if i > 0 {
            let hueco = pagina - paginas[i - 1];
            if hueco == 2 {
                // un solo número oculto: se muestra en vez de puntos
                items.push(ItemPagina::Numero(pagina - 1));
            } else if hueco > 2 {
                items.push(ItemPagina::PuntosSuspensivos);
            }
        }
        items.push(ItemPagina::Numero(pagina));
    }
    items
}

pub fn ventana_adyacente(actual: i64, total: i64) -> Vec<ItemPagina> {
    if total <= 0 {
        return Vec::new();
    }
    let mut items = vec![ItemPagina::Numero(1)];
    if actual - 1 > 2 {
        items.push(ItemPagina::PuntosSuspensivos);
    }
    let desde = (actual - 1).max(2);
    let hasta = (actual + 1).min(total - 1);
    items.extend((desde..=hasta).map(ItemPagina::Numero));
    if actual + 1 < total - 1 {
        items.push(ItemPagina::PuntosSuspensivos);
    }
    if total > 1 {
        items.push(ItemPagina::Numero(total));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::ItemPagina::{Numero, PuntosSuspensivos};
    use super::*;

    #[test]
    fn clasica_muestra_todo_cuando_cabe() {
        assert_eq!(
            ventana_clasica(2, 4),
            vec![Numero(1), Numero(2), Numero(3), Numero(4)]
        );
    }

    #[test]
    fn clasica_recorta_por_ambos_lados() {
        assert_eq!(
            ventana_clasica(7, 20),
            vec![
                PuntosSuspensivos,
                Numero(5),
                Numero(6),
                Numero(7),
                Numero(8),
                Numero(9),
                PuntosSuspensivos
            ]
        );
    }

    #[test]
    fn clasica_se_pega_a_los_extremos() {
        assert_eq!(
            ventana_clasica(1, 9),
            vec![
                Numero(1),
                Numero(2),
                Numero(3),
                Numero(4),
                Numero(5),
                PuntosSuspensivos
            ]
        );
        assert_eq!(
            ventana_clasica(9, 9),
            vec![
                PuntosSuspensivos,
                Numero(5),
                Numero(6),
                Numero(7),
                Numero(8),
                Numero(9)
            ]
        );
    }

    #[test]
    fn limites_siempre_incluye_primera_y_ultima() {
        assert_eq!(
            ventana_limites(5, 10),
            vec![
                Numero(1),
                PuntosSuspensivos,
                Numero(4),
                Numero(5),
                Numero(6),
                PuntosSuspensivos,
                Numero(10)
            ]
        );
    }

    #[test]
    fn limites_colapsa_hueco_de_uno_en_numero() {
        // entre 1 y 3 solo falta la página 2: se muestra, no hay puntos
        assert_eq!(
            ventana_limites(4, 10),
            vec![
                Numero(1),
                Numero(2),
                Numero(3),
                Numero(4),
                Numero(5),
                PuntosSuspensivos,
                Numero(10)
            ]
        );
    }

    #[test]
    fn limites_en_una_sola_pagina() {
        assert_eq!(ventana_limites(1, 1), vec![Numero(1)]);
    }

    #[test]
    fn adyacente_pone_puntos_en_ambos_cortes() {
        assert_eq!(
            ventana_adyacente(5, 10),
            vec![
                Numero(1),
                PuntosSuspensivos,
                Numero(4),
                Numero(5),
                Numero(6),
                PuntosSuspensivos,
                Numero(10)
            ]
        );
    }

    #[test]
    fn adyacente_usa_puntos_aunque_el_hueco_sea_de_uno() {
        // a diferencia del listado de productos, aquí el hueco de una sola
        // página también se abrevia con puntos
        assert_eq!(
            ventana_adyacente(4, 10),
            vec![
                Numero(1),
                PuntosSuspensivos,
                Numero(3),
                Numero(4),
                Numero(5),
                PuntosSuspensivos,
                Numero(10)
            ]
        );
    }

    #[test]
    fn adyacente_sin_cortes_cerca_de_los_extremos() {
        assert_eq!(
            ventana_adyacente(2, 4),
            vec![Numero(1), Numero(2), Numero(3), Numero(4)]
        );
        assert_eq!(ventana_adyacente(1, 1), vec![Numero(1)]);
        assert_eq!(ventana_adyacente(1, 2), vec![Numero(1), Numero(2)]);
    }
}
