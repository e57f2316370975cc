//! Seguimiento de requests en vuelo, un slot por destino de fetch.
//!
//! Cada destino (listado, analytics, transportistas) admite un único
//! request vigente. `begin` emite un ticket monótono y supersede
//! cualquier request anterior; `settle` solo aplica la respuesta si el
//! ticket sigue siendo el vigente, así una respuesta vieja que llega
//! tarde jamás pisa a una más nueva.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Fetching,
    Ready,
    Error,
}

/// Resultado de liquidar una respuesta contra el slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settle {
    /// Era la respuesta del request vigente; el dato quedó aplicado.
    Committed,
    /// El request vigente falló. El dato anterior sigue en pantalla.
    Failed(String),
    /// Respuesta de un request superado: se descarta sin tocar nada.
    Stale,
}

#[derive(Debug, Clone)]
pub struct FetchSlot<T> {
    status: FetchStatus,
    data: Option<T>,
    ticket: u64,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
            ticket: 0,
        }
    }
}

impl<T> FetchSlot<T> {
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_fetching(&self) -> bool {
        self.status == FetchStatus::Fetching
    }

    /// Último dato confirmado. Un fetch fallido o en vuelo no lo borra.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Registra un nuevo request y devuelve su ticket. El request
    /// anterior, si seguía en vuelo, queda superado.
    pub fn begin(&mut self) -> u64 {
        self.ticket += 1;
        self.status = FetchStatus::Fetching;
        self.ticket
    }

    /// Aplica el resultado del request `ticket`. Solo el más reciente
    /// puede mover el estado; el resto devuelve `Stale`.
    pub fn settle(&mut self, ticket: u64, result: Result<T, String>) -> Settle {
        if ticket != self.ticket {
            return Settle::Stale;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.status = FetchStatus::Ready;
                Settle::Committed
            }
            Err(mensaje) => {
                self.status = FetchStatus::Error;
                Settle::Failed(mensaje)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flujo_simple() {
        let mut slot = FetchSlot::<Vec<i32>>::default();
        assert_eq!(slot.status(), FetchStatus::Idle);
        assert_eq!(slot.data(), None);

        let t = slot.begin();
        assert!(slot.is_fetching());

        assert_eq!(slot.settle(t, Ok(vec![1, 2])), Settle::Committed);
        assert_eq!(slot.status(), FetchStatus::Ready);
        assert_eq!(slot.data(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_respuesta_vieja_que_llega_ultima_se_descarta() {
        // Se pide offset=0, enseguida offset=200; la respuesta de
        // offset=0 llega al final y no debe pisar la más nueva.
        let mut slot = FetchSlot::<&'static str>::default();
        let t1 = slot.begin();
        let t2 = slot.begin();

        assert_eq!(slot.settle(t2, Ok("pagina 200")), Settle::Committed);
        assert_eq!(slot.settle(t1, Ok("pagina 0")), Settle::Stale);
        assert_eq!(slot.data(), Some(&"pagina 200"));
        assert_eq!(slot.status(), FetchStatus::Ready);
    }

    #[test]
    fn test_request_superado_no_mueve_el_estado() {
        let mut slot = FetchSlot::<u8>::default();
        let t1 = slot.begin();
        let _t2 = slot.begin();

        // t1 resuelve (incluso con error) mientras t2 sigue en vuelo:
        // el slot tiene que seguir esperando a t2.
        assert_eq!(slot.settle(t1, Err("timeout".to_string())), Settle::Stale);
        assert!(slot.is_fetching());
    }

    #[test]
    fn test_error_conserva_el_dato_anterior() {
        let mut slot = FetchSlot::<&'static str>::default();
        let t1 = slot.begin();
        slot.settle(t1, Ok("datos"));

        let t2 = slot.begin();
        assert_eq!(
            slot.settle(t2, Err("se cayó el backend".to_string())),
            Settle::Failed("se cayó el backend".to_string())
        );
        assert_eq!(slot.status(), FetchStatus::Error);
        assert_eq!(slot.data(), Some(&"datos"));
    }

    #[test]
    fn test_exito_posterior_reemplaza_completo() {
        let mut slot = FetchSlot::<Vec<i32>>::default();
        let t1 = slot.begin();
        slot.settle(t1, Ok(vec![1]));

        let t2 = slot.begin();
        slot.settle(t2, Ok(vec![9, 8]));
        // Reemplazo atómico, nunca acumulación entre páginas.
        assert_eq!(slot.data(), Some(&vec![9, 8]));
    }
}
